// Integration tests for the worked scenarios of the swing engine:
//   two-party thresholds, near three-way tie, label spacing, dot round trip

use ahash::AHashMap;
use openswing::{
    calculate_swing, filter_nearby, flip_point, Battleground, BattlegroundOptions, CurrentResults, District,
    Label, Party, Rgb, ShareTable, Swingometer, SwingometerOptions, ThresholdList,
};

fn party(name: &str, color: Rgb) -> Party {
    Party::new(name, &name[..1], color)
}

fn close(a: f64, b: f64) -> bool { (a - b).abs() < 1e-9 }

#[test]
fn two_party_thresholds() {
    let a = party("Alpha", Rgb::new(255, 0, 0));
    let b = party("Beta", Rgb::new(0, 0, 255));
    let districts = vec![
        District::new("x", [(a.clone(), 60), (b.clone(), 40)]),
        District::new("y", [(a.clone(), 45), (b.clone(), 55)]),
        District::new("z", [(a.clone(), 30), (b.clone(), 70)]),
    ];

    let list = ThresholdList::build(&districts, &a, &b).unwrap();
    let expected = [-0.10, 0.05, 0.20];
    assert_eq!(list.len(), 3);
    for (got, want) in list.values().iter().zip(expected) {
        assert!(close(*got, want), "{:?}", list.values());
    }
    assert!(close(list.swing_for_majority(3), 0.05));

    // The swingometer reports the same threshold for the left party.
    let meter = Swingometer::new(a, b, SwingometerOptions::default()).unwrap();
    let out = meter.project(&districts, 0.0, &CurrentResults::new(), None).unwrap();
    assert!(close(out.left_to_win, 0.05));
    assert_eq!((out.seats_left, out.seats_right), (1, 2));
}

#[test]
fn battleground_three_way_tie() {
    let l = party("Left", Rgb::new(255, 0, 0));
    let r = party("Right", Rgb::new(0, 0, 255));
    let b = party("Bottom", Rgb::new(255, 200, 0));
    let districts = vec![District::new(0, [(l.clone(), 34), (r.clone(), 33), (b.clone(), 33)])];
    let shares = ShareTable::from_districts(&districts);

    for (party, others) in [(&l, [&r, &b]), (&r, [&l, &b]), (&b, [&l, &r])] {
        // Either no result or a swing of well under a point.
        if let Some(swing) = calculate_swing(party, others, &shares, 0.0) {
            assert!(swing.abs() < 0.01, "{party}: {swing}");
        }
    }

    // The district's dot sits next to the origin of the plane.
    let ground = Battleground::new(l, r, b, BattlegroundOptions::default()).unwrap();
    let out = ground.project(&districts, &AHashMap::new(), &CurrentResults::new(), None).unwrap();
    assert_eq!(out.dots.len(), 1);
    assert!(out.dots[0].position.iter().all(|x| x.abs() < 0.01));
}

#[test]
fn label_spacing() {
    let labels = [0.05, 0.052, 0.10].into_iter()
        .map(|p| Label::new(p, Rgb::BLACK, format!("{p}")))
        .collect::<Vec<_>>();
    let kept = filter_nearby(labels, 0.005);
    assert_eq!(kept.iter().map(|l| l.position).collect::<Vec<_>>(), vec![0.05, 0.10]);
}

#[test]
fn dot_position_round_trips_through_flip_point() {
    let l = party("Left", Rgb::new(255, 0, 0));
    let r = party("Right", Rgb::new(0, 0, 255));
    let o = party("Other", Rgb::new(0, 255, 0));
    let districts = vec![
        District::new(1, [(l.clone(), 512), (r.clone(), 301), (o.clone(), 87)]),
        District::new(2, [(l.clone(), 120), (r.clone(), 340), (o.clone(), 200)]),
        District::new(3, [(l.clone(), 7), (r.clone(), 9)]),
    ];

    let meter = Swingometer::new(l.clone(), r.clone(), SwingometerOptions::default()).unwrap();
    let out = meter.project(&districts, 0.0, &CurrentResults::new(), None).unwrap();
    assert_eq!(out.dots.len(), 3);

    for (dot, district) in out.dots.iter().zip(&districts) {
        let toward_right = flip_point(district, &r, &l).unwrap();
        let toward_left = flip_point(district, &l, &r).unwrap();
        assert!(close(dot.position, toward_right));
        assert!(close(dot.position, -toward_left));
    }

    // The same values appear in the right party's threshold list.
    let list = ThresholdList::build(&districts, &r, &l).unwrap();
    let mut positions = out.dots.iter().map(|d| d.position).collect::<Vec<_>>();
    positions.sort_by(f64::total_cmp);
    assert_eq!(positions, list.values());
}
