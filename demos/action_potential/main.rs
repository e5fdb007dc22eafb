use std::{
    fs::File,
    io::{BufWriter, Write},
};
extern crate excitable_membrane;
use excitable_membrane::membrane::{
    find_action_potentials, HodgkinHuxleyMembrane, Simulation, TimeWindow,
};
use excitable_membrane::membrane::stimulus::Pulse;


// Drives the membrane with the classical 10 uA/cm^2 step current starting
// at 20 ms and writes the stimulus and voltage traces to a .csv file at the
// working directory for an external plotting step
fn main() {
    let simulation = Simulation::new(
        TimeWindow { start: 0., stop: 100., dt: 0.001 },
        vec![Pulse { start: 20., end: 100., amplitude: 10. }],
        HodgkinHuxleyMembrane::default(),
    ).expect("Configuration should be valid");

    let record = simulation.run();

    let peaks = find_action_potentials(&record.voltages, 60.);
    println!("{} action potentials over {} ms", peaks.len(), simulation.window.stop);

    let mut file = BufWriter::new(File::create("action_potential.csv")
        .expect("Could not create file"));

    writeln!(file, "time,stimulus,voltage").expect("Could not write to file");
    for i in 0..record.times.len() {
        writeln!(
            file,
            "{},{},{}",
            record.times[i],
            record.stimulus[i],
            record.voltages[i],
        ).expect("Could not write to file");
    }
}
