use speedmath::{angle, Fast2, Fast3, Speed, TunedMath};
use uom::si::angle::degree;
use uom::si::f32::Angle;

fn main() {
    // a heading reported by some sensor, in degrees:
    let heading = Angle::new::<degree>(33.);

    // when the answer feeds into something that must match a reference computation
    // bit-for-bit, use Standard (or Normal, which behaves identically):
    let east = angle::sin(heading, Speed::Standard);
    let north = angle::cos(heading, Speed::Standard);

    // when it only drives, say, an animation, the lookup tables are plenty:
    let rough_east = angle::sin(heading, Speed::Fast1);
    let rough_north = angle::cos(heading, Speed::Fast1);
    assert!((east - rough_east).abs() < 6e-6);
    assert!((north - rough_north).abs() < 6e-6);

    // going back from components to an angle with the polynomial atan2 loses a little more,
    // but still well under a hundredth of a degree:
    let recovered = angle::atan2(rough_east, rough_north, Speed::Fast2);
    let off_by = (recovered - heading).get::<degree>().abs();
    assert!(off_by < 0.02, "{off_by}°");

    // inverse sines outside [-1, 1] have no answer at any speed:
    assert!(angle::asin(1.01, Speed::Fast3).get::<degree>().is_nan());

    // the speed can also be fixed in the type, for code paths that are always hot:
    let falloff = (-0.5_f32).exp_at::<Fast3>();
    assert!((falloff - (-0.5_f32).exp()).abs() / (-0.5_f32).exp() < 4e-2);
    let growth = 3.0_f32.exp2_at::<Fast2>();
    assert!((growth - 8.).abs() / 8. < 2e-3);

    // the tier to use can come from configuration, too:
    let configured: Speed = "fast2".parse().expect("a known tier");
    assert_eq!(configured, Speed::Fast2);
    assert!(configured.error_bound() < Speed::Fast3.error_bound());

    println!(
        "heading {:.3}° = ({east:.6}, {north:.6}); recovered as {:.3}° at {configured}",
        heading.get::<degree>(),
        recovered.get::<degree>(),
    );
}
