use super::*;
use crate::test_support::{geometry, TestCard, TestProvider};
use crate::{LayoutPass, SliderConfig, SnapState};
use web_time::Duration;

const FRAME: Duration = Duration::from_millis(16);

/// Fling distance equal to the velocity, so tests read in pixels.
fn linear_helper() -> CardSnapHelper<fn(f32) -> f32> {
    CardSnapHelper::with_estimator(|velocity| velocity)
}

fn laid_out(provider: &mut TestProvider) -> CardSliderLayoutManager<TestCard> {
    let mut manager = CardSliderLayoutManager::new(SliderConfig::new(50, 150, 12.0))
        .expect("valid configuration");
    manager.set_viewport_width(600.0);
    manager.on_layout_children(provider, LayoutPass::Layout);
    manager
}

fn run_animation(
    manager: &mut CardSliderLayoutManager<TestCard>,
    provider: &mut TestProvider,
) -> usize {
    let mut frames = 0;
    while manager.is_smooth_scrolling() {
        manager.on_animation_frame(FRAME, provider);
        frames += 1;
        assert!(frames < 1_000, "animation never finished");
    }
    frames
}

fn lefts(manager: &CardSliderLayoutManager<TestCard>) -> Vec<(usize, i32)> {
    manager
        .slots()
        .iter()
        .map(|slot| (slot.index(), slot.left()))
        .collect()
}

#[test]
fn fling_distance_maps_to_whole_cards() {
    let helper = linear_helper();
    let geometry = geometry();

    assert_eq!(helper.pick_target(&geometry, Some(4), 12, 320.0), Some(6));
    assert_eq!(helper.pick_target(&geometry, Some(4), 12, -320.0), Some(2));
    assert_eq!(helper.pick_target(&geometry, Some(4), 12, 149.0), None);
    assert_eq!(helper.pick_target(&geometry, Some(4), 12, -149.0), None);
}

#[test]
fn fling_jumps_at_most_three_cards() {
    let helper = linear_helper();
    let geometry = geometry();

    for velocity in [450.0, 1_000.0, 5_000.0, 90_000.0] {
        let target = helper
            .pick_target(&geometry, Some(4), 12, velocity)
            .expect("target");
        assert_eq!(target, 7);
        let target = helper
            .pick_target(&geometry, Some(4), 12, -velocity)
            .expect("target");
        assert_eq!(target, 1);
    }
}

#[test]
fn fling_target_is_clamped_to_the_collection() {
    let helper = linear_helper();
    let geometry = geometry();

    assert_eq!(helper.pick_target(&geometry, Some(10), 12, 5_000.0), Some(11));
    assert_eq!(helper.pick_target(&geometry, Some(1), 12, -5_000.0), Some(0));
}

#[test]
fn degenerate_fling_has_no_target() {
    let helper = linear_helper();
    let geometry = geometry();

    assert_eq!(helper.pick_target(&geometry, Some(0), 0, 5_000.0), None);
    assert_eq!(helper.pick_target(&geometry, None, 12, 5_000.0), None);
}

#[test]
fn default_estimator_follows_velocity_sign() {
    let helper = CardSnapHelper::new();
    let geometry = geometry();

    let forward = helper
        .pick_target(&geometry, Some(5), 12, 4_000.0)
        .expect("fast fling has a target");
    assert!(forward > 5 && forward <= 8);

    let backward = helper
        .pick_target(&geometry, Some(5), 12, -4_000.0)
        .expect("fast fling has a target");
    assert!((2..5).contains(&backward));
}

#[test]
fn settle_distance_by_zone() {
    let geometry = geometry();

    // Active card nudged right: pulled back.
    assert_eq!(distance_to_settle(&geometry, 5, 60, Some(5)), 10);
    // Left of center but not the active card: whole-card jump.
    assert_eq!(distance_to_settle(&geometry, 3, 100, Some(5)), -300);
    // Past the center: falls back to the right stack.
    assert_eq!(distance_to_settle(&geometry, 5, 160, Some(4)), -40);
    assert_eq!(distance_to_settle(&geometry, 5, 124, None), 74);
}

#[test]
fn slow_release_is_left_to_the_host() {
    let mut provider = TestProvider::new(12);
    let mut manager = laid_out(&mut provider);

    assert!(!linear_helper().on_fling(&mut manager, &provider, 40.0, -50.0));
    assert_eq!(manager.snap_state(), SnapState::Idle);
}

#[test]
fn fling_settles_on_the_target() {
    let mut provider = TestProvider::new(12);
    let mut manager = laid_out(&mut provider);

    assert!(linear_helper().on_fling(&mut manager, &provider, 320.0, 0.0));
    assert_eq!(
        manager.snap_state(),
        SnapState::Settling { target: Some(2) }
    );

    run_animation(&mut manager, &mut provider);

    assert_eq!(manager.snap_state(), SnapState::Idle);
    assert_eq!(manager.active_card_position(), Some(2));
    assert_eq!(
        lefts(&manager),
        vec![
            (0, 0),
            (1, 25),
            (2, 50),
            (3, 200),
            (4, 350),
            (5, 500),
            (6, 650)
        ]
    );
}

#[test]
fn idle_snap_pulls_the_active_card_back() {
    let mut provider = TestProvider::new(12);
    let mut manager = laid_out(&mut provider);
    manager.scroll_to_position(5, &mut provider);
    let settled = lefts(&manager);

    assert_eq!(manager.scroll_horizontally_by(-40, &mut provider), -40);
    assert_eq!(manager.find_slot(5).map(|slot| slot.left()), Some(90));
    assert_eq!(manager.top_view().map(|slot| slot.index()), Some(5));

    let helper = CardSnapHelper::new();
    assert!(helper.on_scroll_idle(&mut manager));
    assert_eq!(
        manager.snap_state(),
        SnapState::Settling { target: Some(5) }
    );

    run_animation(&mut manager, &mut provider);
    assert_eq!(lefts(&manager), settled);
    assert!(!helper.on_scroll_idle(&mut manager));
}

#[test]
fn idle_snap_past_center_hands_over_to_the_previous_card() {
    let mut provider = TestProvider::new(12);
    let mut manager = laid_out(&mut provider);
    manager.scroll_to_position(5, &mut provider);

    for _ in 0..11 {
        manager.scroll_horizontally_by(-10, &mut provider);
    }
    let top = manager.top_view().expect("card 5 on its way out");
    assert_eq!((top.index(), top.left()), (5, 160));

    assert!(CardSnapHelper::new().on_scroll_idle(&mut manager));
    assert_eq!(
        manager.snap_state(),
        SnapState::Settling { target: Some(4) }
    );

    run_animation(&mut manager, &mut provider);
    assert_eq!(manager.active_card_position(), Some(4));
    assert_eq!(manager.find_slot(4).map(|slot| slot.left()), Some(50));
    assert_eq!(manager.find_slot(5).map(|slot| slot.left()), Some(200));
}
