use japa_mala::mala::{
    bead_angle, layout, BeadStatus, Wobble, DEFAULT_BEAD_SPACING, DEFAULT_RING_SIZE,
    GURU_BEAD_RADIUS, GURU_COLOR,
};

#[test]
fn beads_sit_evenly_on_one_circle() {
    let ring = layout(128, 0, DEFAULT_RING_SIZE, DEFAULT_BEAD_SPACING);
    let center = DEFAULT_RING_SIZE / 2.0;
    let radius = center - GURU_BEAD_RADIUS - DEFAULT_BEAD_SPACING;

    assert_eq!(ring.beads.len(), 128);
    assert_eq!(ring.threads.len(), 128);
    for bead in &ring.beads {
        let distance = (bead.x - center).hypot(bead.y - center);
        assert!((distance - radius).abs() < 1e-9);
    }

    let first = ring.threads[0].length;
    assert!(ring.threads.iter().all(|t| (t.length - first).abs() < 1e-9));
}

#[test]
fn angles_start_at_top() {
    assert!((bead_angle(0, 128) + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    assert!((bead_angle(64, 128) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn only_guru_bead_is_large_and_purple() {
    let ring = layout(128, 40, DEFAULT_RING_SIZE, DEFAULT_BEAD_SPACING);
    let large: Vec<usize> = ring
        .beads
        .iter()
        .filter(|b| b.radius == GURU_BEAD_RADIUS)
        .map(|b| b.index)
        .collect();
    assert_eq!(large, vec![0]);
    assert_eq!(ring.beads[0].color(), GURU_COLOR);
    assert_eq!(ring.beads[0].status, BeadStatus::Completed);
}

#[test]
fn exactly_one_current_bead() {
    for current in [0, 1, 64, 127] {
        let ring = layout(128, current, DEFAULT_RING_SIZE, DEFAULT_BEAD_SPACING);
        let currents: Vec<usize> = ring
            .beads
            .iter()
            .filter(|b| b.status == BeadStatus::Current)
            .map(|b| b.index)
            .collect();
        assert_eq!(currents, vec![current]);
        assert_eq!(
            ring.beads
                .iter()
                .filter(|b| b.status == BeadStatus::Completed)
                .count(),
            current
        );
    }
}

#[test]
fn tiny_or_broken_sizes_do_not_panic() {
    let ring = layout(16, 0, 4.0, DEFAULT_BEAD_SPACING);
    assert_eq!(ring.beads.len(), 16);
    assert!(ring.beads.iter().all(|b| b.x.is_finite() && b.y.is_finite()));

    let ring = layout(16, 0, f64::NAN, DEFAULT_BEAD_SPACING);
    assert_eq!(ring.size, 0.0);
}

#[test]
fn wobble_runs_indefinitely_inside_five_degrees() {
    let mut wobble = Wobble::default();
    let mut turns = 0;
    let mut last = wobble.degrees();
    let mut rising = true;
    for _ in 0..10_000 {
        let now = wobble.step();
        assert!(now.abs() <= 5.0);
        if (now > last) != rising {
            rising = now > last;
            turns += 1;
        }
        last = now;
    }
    assert!(turns > 40);
}
