//! Logs flight data of the user aircraft.
use log::info;
use msfs_compat::sim_connect::{data_definition, Period, SimConnectRecv, SIMCONNECT_OBJECT_ID_USER};
use msfs_compat::StandaloneModule;

#[data_definition]
#[derive(Debug)]
pub struct Data {
    #[name = "RADIO HEIGHT"]
    #[unit = "Feet"]
    #[epsilon = 0.01]
    pub height: f64,
    #[name = "AIRSPEED INDICATED"]
    #[unit = "Knots"]
    #[epsilon = 0.01]
    pub airspeed: f64,
}

#[data_definition]
#[derive(Debug)]
pub struct Controls {
    #[name = "ELEVATOR POSITION"]
    #[unit = "Position"]
    pub elevator: f64,
    #[name = "AILERON POSITION"]
    #[unit = "Position"]
    pub ailerons: f64,
    #[name = "RUDDER POSITION"]
    #[unit = "Position"]
    pub rudder: f64,
    #[name = "ELEVATOR TRIM POSITION"]
    #[unit = "Position"]
    pub elevator_trim: f64,
}

const DATA_REQUEST: u32 = 0;
const CONTROLS_REQUEST: u32 = 1;

#[msfs_compat::standalone_module]
pub async fn log_module(mut module: StandaloneModule) -> Result<(), Box<dyn std::error::Error>> {
    let mut sim = module.open_simconnect("LOG")?;
    sim.request_data_on_sim_object::<Data>(DATA_REQUEST, SIMCONNECT_OBJECT_ID_USER, Period::SimFrame)?;
    sim.request_data_on_sim_object::<Controls>(
        CONTROLS_REQUEST,
        SIMCONNECT_OBJECT_ID_USER,
        Period::SimFrame,
    )?;

    while let Some(recv) = module.next_event().await {
        match recv {
            SimConnectRecv::SimObjectData(event) => match event.id() {
                DATA_REQUEST => info!("{:?}", event.into::<Data>(&sim)),
                CONTROLS_REQUEST => info!("{:?}", event.into::<Controls>(&sim)),
                _ => {}
            },
            SimConnectRecv::Quit(_) => break,
            recv => info!("{:?}", recv),
        }
    }
    Ok(())
}
