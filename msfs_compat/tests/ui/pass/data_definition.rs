use msfs_compat::sim_connect::{data_definition, DataDefinition, DataXYZ};
use msfs_compat::sys;

#[data_definition]
#[derive(Debug, Default)]
struct Position {
    #[name = "PLANE ALTITUDE"]
    #[unit = "feet"]
    #[epsilon = 0.5]
    altitude: f64,
    #[name = "VELOCITY BODY"]
    #[unit = "feet per second"]
    velocity: DataXYZ,
    #[name = "ATC ID"]
    #[unit = ""]
    atc_id: [u8; 32],
    #[name = "SIM ON GROUND"]
    on_ground: i32,
    #[name = "NUMBER OF ENGINES"]
    #[unit = "number"]
    engines: i32,
}

fn main() {
    let definitions = Position::DEFINITIONS;
    assert_eq!(definitions.len(), 5);
    assert_eq!(definitions[0], ("PLANE ALTITUDE", "feet", 0.5, sys::SIMCONNECT_DATATYPE_FLOAT64));
    assert_eq!(definitions[1].3, sys::SIMCONNECT_DATATYPE_XYZ);
    assert_eq!(definitions[2].3, sys::SIMCONNECT_DATATYPE_STRING32);
    assert_eq!(definitions[3], ("SIM ON GROUND", "bool", 0.0, sys::SIMCONNECT_DATATYPE_INT32));
}
