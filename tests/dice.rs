//! Dice and dice box integration tests.

use cardice::{Dice, DiceBox, DiceError, DiceOptions, MIN_FACES_COUNT};

fn fixed(value: u32) -> Dice {
    Dice::from_faces([value, value]).unwrap()
}

#[test]
fn dice_creation_errors() {
    assert_eq!(
        Dice::<u32>::from_options(DiceOptions::default()).unwrap_err(),
        DiceError::EmptyConfiguration
    );
    assert_eq!(Dice::new(0).unwrap_err(), DiceError::EmptyConfiguration);
    assert_eq!(
        Dice::new(1).unwrap_err(),
        DiceError::FacesCountTooSmall {
            min: MIN_FACES_COUNT,
            count: 1
        }
    );
    assert_eq!(
        Dice::from_faces([1]).unwrap_err(),
        DiceError::FacesItemsTooFew {
            min: MIN_FACES_COUNT,
            count: 1
        }
    );
    assert_eq!(
        Dice::<u32>::from_faces([]).unwrap_err(),
        DiceError::EmptyConfiguration
    );
}

#[test]
fn faces_count_takes_precedence_over_items() {
    let options = DiceOptions::default()
        .with_faces_items([10_u32, 20, 30])
        .with_faces_count(4);
    let dice = Dice::from_options(options).unwrap();
    assert_eq!(dice.faces(), &[1, 2, 3, 4]);

    let zero_count = DiceOptions::default()
        .with_faces_count(0)
        .with_faces_items([10_u32, 20]);
    let dice = Dice::from_options(zero_count).unwrap();
    assert_eq!(dice.faces(), &[10, 20]);

    let too_few = DiceOptions::default().with_faces_items([10_u32]);
    assert_eq!(
        Dice::from_options(too_few).unwrap_err(),
        DiceError::FacesItemsTooFew {
            min: MIN_FACES_COUNT,
            count: 1
        }
    );
}

#[test]
fn options_build_dice_with_custom_faces() {
    let options = DiceOptions::default()
        .with_faces_items(['Q', 'W', 'E'])
        .with_seed(4);
    assert_eq!(options.faces_count(), None);
    assert_eq!(options.seed(), Some(4));

    let mut dice: Dice<char> = Dice::from_options(options).unwrap();
    assert_eq!(dice.faces(), &['Q', 'W', 'E']);
    let rolled = dice.rolling();
    assert!(dice.faces().contains(&rolled));

    let too_few = DiceOptions::default().with_faces_items(["only"]);
    assert_eq!(
        Dice::from_options(too_few).unwrap_err(),
        DiceError::FacesItemsTooFew {
            min: MIN_FACES_COUNT,
            count: 1
        }
    );
    assert_eq!(
        Dice::<char>::from_options(DiceOptions::default()).unwrap_err(),
        DiceError::EmptyConfiguration
    );
}

#[test]
fn dice_has_a_value_after_creation() {
    let dice = Dice::with_seed(6, 1).unwrap();
    assert!(dice.faces().contains(dice.value()));
}

#[test]
fn rolling_updates_value() {
    let mut dice = Dice::with_seed(6, 2).unwrap();
    for _ in 0..100 {
        let value = dice.rolling();
        assert!((1..=6).contains(&value));
        assert_eq!(*dice.value(), value);
    }
}

#[test]
fn rolling_reaches_every_face() {
    let mut dice = Dice::with_seed(4, 3).unwrap();
    let mut seen = [false; 4];
    for _ in 0..200 {
        seen[dice.rolling() as usize - 1] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn seeded_dice_repeat() {
    let mut a = Dice::with_seed(20, 11).unwrap();
    let mut b = Dice::with_seed(20, 11).unwrap();
    let rolls_a: Vec<u32> = (0..10).map(|_| a.rolling()).collect();
    let rolls_b: Vec<u32> = (0..10).map(|_| b.rolling()).collect();
    assert_eq!(rolls_a, rolls_b);
}

#[test]
fn dice_interactions() {
    let five = fixed(5);
    let two = fixed(2);
    assert!(five > two);
    assert!(!(five < two));
    assert!(!(five == two));
    assert!(five != two);
    assert_eq!(&five + &two, 7);
    assert_eq!(five, fixed(5));
}

#[test]
fn add_to_handles_missing_and_plain_values() {
    let dice = fixed(3);
    assert_eq!(dice.add_to(None), 3);
    assert_eq!(dice.add_to(Some(0)), 3);
    assert_eq!(dice.add_to(Some(4)), 7);
}

#[test]
fn dice_with_custom_faces() {
    let mut dice = Dice::from_faces_with_seed(['Q', 'W', 'E', 'R', 'T', 'Y'], 5).unwrap();
    let face = dice.rolling();
    assert!("QWERTY".contains(face));

    let mut halves = Dice::from_faces([0.5_f64, 1.5]).unwrap();
    let value = halves.rolling();
    assert!([0.5, 1.5].contains(&value));
}

#[test]
fn dice_display() {
    let dice = fixed(4);
    assert_eq!(dice.to_string(), "4 of [4, 4]");
}

#[test]
fn dice_box_add() {
    let mut dice_box = DiceBox::new();
    assert!(dice_box.is_empty());
    dice_box.add(Dice::new(6).unwrap());
    assert_eq!(dice_box.len(), 1);
    dice_box.add(Dice::new(6).unwrap());
    assert_eq!(dice_box.len(), 2);
}

#[test]
fn dice_box_rolling_sums_values() {
    let mut dice_box = DiceBox::new();
    dice_box.add(Dice::with_seed(6, 1).unwrap());
    dice_box.add(Dice::with_seed(6, 2).unwrap());

    let total = dice_box.rolling().unwrap();
    let items = dice_box.items();
    assert_eq!(total, &items[0] + &items[1]);
    assert!((2..=12).contains(&total));
}

#[test]
fn dice_box_with_fixed_faces() {
    let mut dice_box: DiceBox = [fixed(5), fixed(2)].into_iter().collect();
    assert_eq!(dice_box.rolling(), Some(7));

    dice_box.extend([fixed(1)]);
    assert_eq!(dice_box.rolling(), Some(8));
}

#[test]
fn single_dice_box_returns_its_value() {
    let mut dice_box = DiceBox::new();
    dice_box.add(fixed(6));
    assert_eq!(dice_box.rolling(), Some(6));
}

#[test]
fn empty_dice_box_rolls_nothing() {
    let mut dice_box: DiceBox = DiceBox::new();
    assert_eq!(dice_box.rolling(), None);
}
