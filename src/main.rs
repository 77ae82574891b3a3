use driftfield::Simulation;

fn main() {
    if let Err(e) = Simulation::new().run() {
        eprintln!("driftfield: {}", e);
        std::process::exit(1);
    }
}
