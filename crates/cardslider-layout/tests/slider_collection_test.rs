//! Collection changes and state restoration seen from the host side.

use cardslider_layout::{SavedState, SliderConfig};
use cardslider_testing::robot_assertions::{assert_contiguous, assert_settled_on};
use cardslider_testing::SliderRobot;

fn robot(count: usize) -> SliderRobot {
    SliderRobot::new(count, SliderConfig::new(50, 150, 12.0), 600.0)
        .expect("valid configuration")
}

fn assert_settled(robot: &SliderRobot, active: usize) {
    let slots = robot.manager().slots();
    assert_eq!(robot.active(), Some(active));
    assert_contiguous(slots);
    assert_settled_on(robot.manager().geometry(), slots, active);

    let attached: Vec<usize> = slots.iter().map(|slot| slot.index()).collect();
    assert_eq!(robot.provider().live_indices(), attached);
}

#[test]
fn removing_cards_before_the_active_one_keeps_it_active() {
    let mut robot = robot(12);
    robot.scroll_to(6);
    robot.provider_mut().clear_log();

    robot.remove_items(4, 2);

    assert_eq!(robot.provider().recycled(), &[4, 5]);
    assert_settled(&robot, 4);
    assert_eq!(
        robot.lefts(),
        vec![(2, 0), (3, 25), (4, 50), (5, 200), (6, 350), (7, 500), (8, 650)]
    );
}

#[test]
fn removing_the_active_card_at_the_end_falls_back_to_the_new_last() {
    let mut robot = robot(12);
    robot.scroll_to(11);

    robot.remove_items(10, 2);

    assert_settled(&robot, 9);
    assert_eq!(robot.lefts(), vec![(7, 0), (8, 25), (9, 50)]);
}

#[test]
fn removing_cards_after_the_window_changes_nothing_visible() {
    let mut robot = robot(20);
    robot.scroll_to(3);
    let before = robot.lefts();

    robot.remove_items(15, 3);

    assert_settled(&robot, 3);
    assert_eq!(robot.lefts(), before);
}

#[test]
fn removing_everything_empties_the_window() {
    let mut robot = robot(4);
    robot.scroll_to(2);

    robot.remove_items(0, 4);

    assert!(robot.manager().slots().is_empty());
    assert_eq!(robot.provider().live_count(), 0);
    assert!(!robot.manager().can_scroll_horizontally());
}

#[test]
fn swapping_the_collection_starts_over() {
    let mut robot = robot(12);
    robot.scroll_to(7);

    robot.replace_items(3);

    assert_settled(&robot, 0);
    assert_eq!(robot.lefts(), vec![(0, 50), (1, 200), (2, 350)]);
}

#[test]
fn saved_state_survives_a_byte_round_trip() {
    let mut robot_a = robot(12);
    robot_a.scroll_to(7);
    robot_a.drag_and_release(-30, 0.0);
    let bytes = robot_a.save_state().to_bytes();

    let mut robot_b = robot(12);
    let state = SavedState::from_bytes(&bytes).expect("four bytes");
    robot_b.manager_mut().restore_state(state);
    robot_b.layout();

    assert_settled(&robot_b, 7);
    assert_eq!(robot_b.lefts(), robot_a.lefts());
}

#[test]
fn empty_saved_state_keeps_the_current_card() {
    let mut robot = robot(12);
    robot.scroll_to(4);

    robot.manager_mut().restore_state(SavedState::default());
    robot.layout();

    assert_settled(&robot, 4);
}
