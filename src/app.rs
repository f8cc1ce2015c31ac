//! The frame loop
//!
//! One frame is: poll events → step physics → draw → present → wait. A close
//! event ends the loop once the frame it arrived in has been presented.

use crate::platform::{Presenter, PresenterEvent};
use crate::renderer::draw_scene;
use crate::sim::{SimEvent, SimState, step};

/// Totals for a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub edge_bounces: u64,
    pub screen_bounces: u64,
}

/// Drive the simulation until the presenter asks to close
pub fn run<P: Presenter + ?Sized>(
    state: &mut SimState,
    presenter: &mut P,
    target_fps: u32,
) -> RunSummary {
    let mut summary = RunSummary::default();
    let fps_log_interval = u64::from(target_fps.max(1));

    loop {
        let close = presenter
            .poll_events()
            .contains(&PresenterEvent::Close);

        for event in step(state) {
            match event {
                SimEvent::EdgeBounce { .. } => summary.edge_bounces += 1,
                SimEvent::ScreenBounce { .. } => summary.screen_bounces += 1,
            }
        }

        draw_scene(state, presenter);
        presenter.present();
        let elapsed = presenter.tick(target_fps);
        summary.frames += 1;

        if summary.frames % fps_log_interval == 0 {
            log::debug!(
                "Frame {}: {:.2} ms, ball ({:.1}, {:.1}), angle {:.0}°",
                state.frame,
                elapsed.as_secs_f64() * 1000.0,
                state.body.pos.x,
                state.body.pos.y,
                state.container.rotation_degrees
            );
        }

        if close {
            log::info!("Close requested after {} frames", summary.frames);
            break;
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::HeadlessPresenter;

    #[test]
    fn test_run_stops_at_frame_limit() {
        let mut state = SimState::default();
        let mut presenter = HeadlessPresenter::new(Some(5)).unpaced();

        let summary = run(&mut state, &mut presenter, 60);

        assert_eq!(summary.frames, 5);
        assert_eq!(state.frame, 5);
        assert_eq!(presenter.frames_presented(), 5);
        // Last presented frame shows the ball where the simulation left it
        assert_eq!(presenter.last_frame().circle_center(), Some(state.body.pos));
    }

    #[test]
    fn test_close_finishes_current_frame() {
        let mut state = SimState::default();
        let mut presenter = HeadlessPresenter::new(None).unpaced();
        presenter.request_close();

        let summary = run(&mut state, &mut presenter, 60);

        assert_eq!(summary.frames, 1);
        assert_eq!(presenter.frames_presented(), 1);
    }

    #[test]
    fn test_run_counts_bounces() {
        let mut state = SimState::default();
        let mut presenter = HeadlessPresenter::new(Some(100)).unpaced();

        let summary = run(&mut state, &mut presenter, 60);

        assert_eq!(summary.frames, 100);
        assert!(summary.edge_bounces > 0);
    }

    #[test]
    fn test_run_paced() {
        let mut state = SimState::default();
        let mut presenter = HeadlessPresenter::new(Some(3));

        let start = std::time::Instant::now();
        run(&mut state, &mut presenter, 100);

        assert!(start.elapsed() >= std::time::Duration::from_millis(20));
        assert!(presenter.fps().is_some_and(|fps| fps > 0.0));
    }
}
