use approx::assert_relative_eq;
use collision_kinematics::{
    numeric::DEFAULT_MAX_RELATIVE,
    units::{PEV, TEV},
    CollisionCard, EventFrame, EventKinematics, FixedTargetEnergy, Float, Species,
};

#[test]
fn cosmic_ray_air_shower_card() {
    let card: CollisionCard = "
        # 1 PeV proton hitting the atmosphere
        particle1  p
        particle2  (14,7)*0.78 (16,8)*0.21 (40,18)*0.01
        ekin       1 PeV
    "
    .parse()
    .unwrap();
    let kin = card.to_kinematics().unwrap();
    assert_eq!(kin.frame(), EventFrame::FixedTarget);
    assert_relative_eq!(kin.ekin(), PEV, max_relative = DEFAULT_MAX_RELATIVE);
    let Species::Composite(target) = kin.particle2() else {
        panic!("expected a composite target, got {}", kin.particle2());
    };
    assert_eq!(target.max_mass_number(), 40);
    assert_relative_eq!(
        target.components().iter().map(|(_, f)| f).sum::<Float>(),
        1.,
        max_relative = DEFAULT_MAX_RELATIVE
    );

    let reference = collision_kinematics::fixed_target(
        FixedTargetEnergy::KinEnergy(PEV),
        "p",
        card.particle2.clone(),
    )
    .unwrap();
    assert_eq!(kin, reference);
}

#[test]
fn heavy_ion_card_matches_builder() {
    let card: CollisionCard = "
        particle1 Pb208
        particle2 Pb
        ecm       5.36 TeV
        frame     fixed-target
    "
    .parse()
    .unwrap();
    let from_builder = EventKinematics::builder((208, 82), (208, 82))
        .ecm(5.36 * TEV)
        .frame(EventFrame::FixedTarget)
        .build()
        .unwrap();
    assert_eq!(card.to_kinematics().unwrap(), from_builder);
}

#[test]
fn card_level_errors_keep_their_cause() {
    let card: CollisionCard = "particle1 p\nparticle2 p\nelab 0.5".parse().unwrap();
    let err = card.to_kinematics().unwrap_err();
    let report = format!("{err:?}");
    assert!(report.contains("valid collision"), "{report}");
    assert!(report.contains("projectile mass"), "{report}");
}
