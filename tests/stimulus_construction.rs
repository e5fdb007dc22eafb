#[cfg(test)]
mod tests {
    use ndarray::Array1;
    use excitable_membrane::membrane::TimeWindow;
    use excitable_membrane::membrane::stimulus::{stimulus_waveform, Pulse};

    fn value_at(times: &Array1<f32>, stimulus: &Array1<f32>, time: f32) -> f32 {
        let index = times.iter()
            .position(|&t| t >= time)
            .expect("Time should lie on the axis");

        stimulus[index]
    }

    #[test]
    pub fn test_empty_pulse_list_gives_all_zeros() {
        let times = TimeWindow { start: 0., stop: 100., dt: 0.01 }.axis();

        let stimulus = stimulus_waveform(&times, &[]);

        assert_eq!(stimulus.len(), times.len());
        assert!(stimulus.iter().all(|&value| value == 0.));
    }

    #[test]
    pub fn test_single_pulse_is_boundary_inclusive_at_its_start() {
        let times = TimeWindow { start: 0., stop: 100., dt: 0.001 }.axis();

        let stimulus = stimulus_waveform(
            &times,
            &[Pulse { start: 20., end: 100., amplitude: 10. }],
        );

        for (&t, &value) in times.iter().zip(stimulus.iter()) {
            if t < 20. {
                assert_eq!(value, 0.);
            } else {
                assert_eq!(value, 10.);
            }
        }
    }

    #[test]
    pub fn test_later_pulses_overwrite_the_tails_of_earlier_ones() {
        let times = TimeWindow { start: 0., stop: 100., dt: 0.1 }.axis();

        let stimulus = stimulus_waveform(
            &times,
            &[
                Pulse { start: 0., end: 50., amplitude: 5. },
                Pulse { start: 25., end: 75., amplitude: 7. },
            ],
        );

        assert_eq!(value_at(&times, &stimulus, 10.), 5.);
        assert_eq!(value_at(&times, &stimulus, 30.), 7.);
        // the second pulse repaints samples the first pulse already zeroed
        assert_eq!(value_at(&times, &stimulus, 60.), 7.);
        assert_eq!(value_at(&times, &stimulus, 80.), 0.);
    }

    #[test]
    pub fn test_pulse_order_changes_the_waveform() {
        let times = TimeWindow { start: 0., stop: 100., dt: 0.1 }.axis();

        let stimulus = stimulus_waveform(
            &times,
            &[
                Pulse { start: 25., end: 75., amplitude: 7. },
                Pulse { start: 0., end: 50., amplitude: 5. },
            ],
        );

        assert_eq!(value_at(&times, &stimulus, 30.), 5.);
        assert_eq!(value_at(&times, &stimulus, 60.), 0.);
    }

    #[test]
    pub fn test_out_of_window_pulses_affect_no_samples() {
        let times = TimeWindow { start: 0., stop: 100., dt: 0.1 }.axis();

        let stimulus = stimulus_waveform(
            &times,
            &[Pulse { start: 150., end: 200., amplitude: 3. }],
        );

        assert!(stimulus.iter().all(|&value| value == 0.));
    }

    #[test]
    pub fn test_pulse_ending_before_it_starts_is_invalid() {
        assert!(Pulse { start: 50., end: 20., amplitude: 10. }.validate().is_err());
        assert!(Pulse { start: 20., end: 20., amplitude: 10. }.validate().is_ok());
    }
}
