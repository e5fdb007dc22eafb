#[cfg(test)]
mod tests {
    use excitable_membrane::membrane::gating::{
        alpha_h, alpha_m, alpha_n, beta_h, beta_m, beta_n, gate_change,
    };
    use excitable_membrane::membrane::{HodgkinHuxleyMembrane, MembraneState};

    #[test]
    pub fn test_resting_state_starts_at_zero_displacement() {
        let state = HodgkinHuxleyMembrane::default().resting_state();

        assert_eq!(state.v, 0.);

        for gate in [state.n, state.m, state.h] {
            assert!(gate >= 0. && gate <= 1.);
        }
    }

    #[test]
    pub fn test_single_step_matches_the_closed_form_update() {
        let membrane = HodgkinHuxleyMembrane::default();
        let state = membrane.resting_state();
        let dt = 0.001;
        let input = 10.;

        let i_k = 36. * state.n.powi(4) * (state.v + 12.);
        let i_na = state.m.powi(3) * state.h * 120. * (state.v - 120.);
        let i_l = 0.3 * (state.v - 10.6);
        let expected_v = state.v + dt * ((input - (i_na + i_k + i_l)) / 1.);

        let next = membrane.step(&state, input, dt);

        assert!((next.v - expected_v).abs() < 1e-6);
    }

    #[test]
    pub fn test_derivatives_use_the_state_before_the_update() {
        let membrane = HodgkinHuxleyMembrane::default();
        let state = MembraneState { v: 40., n: 0.4, m: 0.2, h: 0.5 };
        let dt = 0.01;

        let next = membrane.step(&state, 0., dt);

        // every gate advances with rates taken at the pre update voltage,
        // not at the voltage the same step produces
        let expected_n = state.n + dt * gate_change(alpha_n(40.), beta_n(40.), state.n);
        let expected_m = state.m + dt * gate_change(alpha_m(40.), beta_m(40.), state.m);
        let expected_h = state.h + dt * gate_change(alpha_h(40.), beta_h(40.), state.h);

        assert!((next.n - expected_n).abs() < 1e-6);
        assert!((next.m - expected_m).abs() < 1e-6);
        assert!((next.h - expected_h).abs() < 1e-6);
    }

    #[test]
    pub fn test_stepping_is_reproducible() {
        let membrane = HodgkinHuxleyMembrane::default();

        let mut first = membrane.resting_state();
        let mut second = membrane.resting_state();

        for _ in 0..1000 {
            first = membrane.step(&first, 10., 0.01);
            second = membrane.step(&second, 10., 0.01);
        }

        assert_eq!(first.v, second.v);
        assert_eq!(first.n, second.n);
        assert_eq!(first.m, second.m);
        assert_eq!(first.h, second.h);
    }
}
