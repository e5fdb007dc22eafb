extern crate excitable_membrane;
use excitable_membrane::membrane::{
    find_action_potentials, run_batch, HodgkinHuxleyMembrane, Simulation, TimeWindow,
};
use excitable_membrane::membrane::stimulus::Pulse;


// Sweeps the amplitude of the injected step current and reports how many
// action potentials each run produces, the runs execute in parallel since
// each one owns disjoint state
fn main() {
    let amplitudes = [0., 2.5, 5., 7.5, 10., 20., 50.];

    let simulations: Vec<Simulation> = amplitudes.iter()
        .map(|&amplitude| {
            Simulation::new(
                TimeWindow { start: 0., stop: 100., dt: 0.001 },
                vec![Pulse { start: 20., end: 100., amplitude }],
                HodgkinHuxleyMembrane::default(),
            ).expect("Configuration should be valid")
        })
        .collect();

    let records = run_batch(&simulations);

    for (amplitude, record) in amplitudes.iter().zip(records.iter()) {
        let peaks = find_action_potentials(&record.voltages, 60.);

        println!("amplitude: {} uA/cm^2, action potentials: {}", amplitude, peaks.len());
    }
}
