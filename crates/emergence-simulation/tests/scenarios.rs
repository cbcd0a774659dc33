use emergence_physics::{InteractionRule, Particle, RuleTable, Sign, Species, Vector2};
use emergence_simulation::{BoundaryMode, IntegrationMethod, Simulation, SimulationConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Square domain of side 1000 with the given method and rules
fn square_config(method: IntegrationMethod, rules: RuleTable) -> SimulationConfig {
    SimulationConfig {
        domain_min: Vector2::ZERO,
        domain_max: Vector2::new(1000.0, 1000.0),
        time_delta: 0.005,
        method,
        rules,
        seed: Some(2024),
        ..Default::default()
    }
}

/// A and B repel inside 5 radii and attract beyond, in both directions
fn attract_outside_rules() -> RuleTable {
    let rule = InteractionRule::Piecewise {
        threshold_factor: 5.0,
        inside_power: 2,
        inside: Sign::Repel,
        outside: Sign::Attract,
    };
    let mut rules = RuleTable::neutral();
    rules.set(Species::A, Species::B, rule);
    rules.set(Species::B, Species::A, rule);
    rules
}

fn assert_invariants(sim: &Simulation) {
    let config = sim.config();
    for (i, p) in sim.particles().iter().enumerate() {
        assert!(p.position.is_finite(), "particle {i} position {:?}", p.position);
        assert!(p.velocity.is_finite(), "particle {i} velocity {:?}", p.velocity);
        assert!(
            p.position.cmpge(config.domain_min).all() && p.position.cmple(config.domain_max).all(),
            "particle {i} escaped to {:?}",
            p.position
        );
        assert!(
            p.velocity.abs().max_element() <= config.max_velocity,
            "particle {i} velocity {:?} over the limit",
            p.velocity
        );
    }
}

#[test]
fn two_species_pair_attracts_along_x() {
    let config = square_config(IntegrationMethod::Leapfrog, attract_outside_rules());
    let particles = vec![
        Particle::new(Vector2::new(400.0, 400.0), Species::A).with_radius(5.0),
        Particle::new(Vector2::new(600.0, 400.0), Species::B).with_radius(5.0),
    ];
    let mut sim = Simulation::new(config, particles).unwrap();

    let before = sim.particles()[0].position.distance(sim.particles()[1].position);
    sim.step();
    let (a, b) = (sim.particles()[0], sim.particles()[1]);
    let after = a.position.distance(b.position);

    assert!(after < before, "separation went from {before} to {after}");
    assert!(a.position.x > 400.0);
    assert!(b.position.x < 600.0);
    assert_eq!(a.position.y, 400.0);
    assert_eq!(b.position.y, 400.0);

    // Cold start: v = 0.5 * F * dt with F = 200 * 5
    assert!((a.velocity.x - 2.5).abs() < 1e-12);
    assert!((a.position.x - 400.025).abs() < 1e-9);
}

#[test]
fn pair_inside_threshold_repels() {
    let config = square_config(IntegrationMethod::Euler, attract_outside_rules());
    let particles = vec![
        Particle::new(Vector2::new(490.0, 500.0), Species::A).with_radius(5.0),
        Particle::new(Vector2::new(510.0, 500.0), Species::B).with_radius(5.0),
    ];
    let mut sim = Simulation::new(config, particles).unwrap();
    sim.step();
    let (a, b) = (sim.particles()[0], sim.particles()[1]);
    assert!(a.position.distance(b.position) > 20.0);
}

#[test]
fn particle_reflects_off_left_wall() {
    let config = square_config(IntegrationMethod::Euler, RuleTable::neutral());
    let policy = config.boundary_policy();
    let mut p = Particle::with_velocity(
        Vector2::new(-5.0, 500.0),
        Vector2::new(-50.0, 0.0),
        Species::A,
    );

    policy.enforce(&mut p);

    assert_eq!(p.position.x, config.epsilon);
    assert_eq!(p.position.y, 500.0);
    assert_eq!(p.velocity.x, 50.0);
}

#[test]
fn extreme_forces_respect_velocity_limit() {
    for method in [IntegrationMethod::Euler, IntegrationMethod::Leapfrog] {
        let mut config = square_config(method, attract_outside_rules());
        config.multiplier = 1e9;
        config.population_size = 60;
        let mut sim = Simulation::from_config(config).unwrap();

        for _ in 0..25 {
            sim.step();
            assert_invariants(&sim);
        }
    }
}

#[test]
fn out_of_bounds_positions_are_pulled_inside() {
    let mut rng = StdRng::seed_from_u64(99);
    for mode in [BoundaryMode::Reflect, BoundaryMode::Wrap] {
        let config = SimulationConfig {
            boundary: mode,
            ..square_config(IntegrationMethod::Euler, RuleTable::neutral())
        };
        let policy = config.boundary_policy();

        for _ in 0..1000 {
            let position = Vector2::new(
                rng.random_range(-1e12..1e12),
                rng.random_range(-1e12..1e12),
            );
            let velocity = Vector2::new(rng.random_range(-1e9..1e9), rng.random_range(-1e9..1e9));
            let mut p = Particle::with_velocity(position, velocity, Species::B);
            policy.enforce(&mut p);
            assert!(policy.contains(p.position), "{mode:?}: {position:?} -> {:?}", p.position);
            assert!(p.velocity.abs().max_element() <= config.max_velocity);
        }
    }
}

#[test]
fn default_world_stays_well_formed() {
    for method in [IntegrationMethod::Euler, IntegrationMethod::Leapfrog] {
        for boundary in [BoundaryMode::Reflect, BoundaryMode::Wrap] {
            let config = SimulationConfig {
                population_size: 150,
                method,
                boundary,
                seed: Some(11),
                ..Default::default()
            };
            let mut sim = Simulation::from_config(config).unwrap();
            for _ in 0..40 {
                let report = sim.step();
                assert_eq!(report.resets, 0);
            }
            assert_eq!(sim.tick(), 40);
            assert_invariants(&sim);
        }
    }
}

#[test]
fn seeded_runs_are_deterministic() {
    let config = SimulationConfig {
        population_size: 80,
        seed: Some(5),
        ..Default::default()
    };
    let mut a = Simulation::from_config(config.clone()).unwrap();
    let mut b = Simulation::from_config(config).unwrap();
    for _ in 0..20 {
        a.step();
        b.step();
    }
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn same_species_population_feels_nothing() {
    let config = square_config(IntegrationMethod::Leapfrog, RuleTable::default());
    let particles: Vec<Particle> = (0..10)
        .map(|i| Particle::new(Vector2::new(100.0 + 50.0 * i as f64, 300.0), Species::C))
        .collect();
    let mut sim = Simulation::new(config, particles.clone()).unwrap();
    sim.step();

    for (before, after) in particles.iter().zip(sim.particles()) {
        assert_eq!(after.force, Vector2::ZERO);
        assert_eq!(after.position, before.position);
    }
}
