use msfs_compat::sim_connect::{client_data_definition, ClientDataDefinition};

#[client_data_definition]
struct Lights {
    #[epsilon = 0.1]
    brightness: f64,
    on: u8,
}

fn main() {
    assert_eq!(
        Lights::get_definitions(),
        vec![(0, 8, 0.1), (8, 1, 0.0)]
    );
    assert_eq!(std::mem::size_of::<Lights>(), 16);
}
