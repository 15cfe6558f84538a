use approx::assert_relative_eq;
use flipbook::prelude::*;
use flipbook::{FrameTiming, TimingSource};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn run_sequencer(
    sequencer: &mut FrameSequencer,
    frame_count: usize,
    delta: f32,
    ticks: usize,
) -> Vec<usize> {
    (0..ticks)
        .map(|_| {
            sequencer
                .tick(delta, frame_count)
                .active_frame
                .expect("sequence has frames")
        })
        .collect()
}

mod progression {
    use super::*;

    #[test]
    fn plays_frames_round_robin() {
        let mut sequencer = FrameSequencer::new(0.1);

        let frames = run_sequencer(&mut sequencer, 3, 0.07, 9);

        assert_eq!(frames, &[0, 1, 2, 2, 0, 1, 1, 2, 0]);
    }

    #[test]
    fn long_tick_catches_up_fully() {
        let mut sequencer = FrameSequencer::new(0.1);

        let outcome = sequencer.tick(0.35, 4);

        assert_eq!(outcome.active_frame, Some(3));
        assert_relative_eq!(sequencer.time_since_current_frame(), 0.05, epsilon = 1e-6);
    }

    #[test]
    fn current_frame_stays_in_range_while_frames_change() {
        let mut sequencer = FrameSequencer::new(0.05);
        let mut rng = StdRng::seed_from_u64(5);
        let counts = [4usize, 4, 2, 7, 1, 1, 9, 3, 0, 5];

        for round in 0..200 {
            let frame_count = counts[round % counts.len()];
            let delta = RandomSource::time_offset(&mut rng, 0.3);
            let outcome = sequencer.tick(delta, frame_count);
            if frame_count > 0 {
                assert!(sequencer.current_frame() < frame_count);
                assert_eq!(outcome.active_frame, Some(sequencer.current_frame()));
                assert_relative_eq!(
                    sequencer.animation_duration(),
                    sequencer.frame_duration() * frame_count as f32,
                    epsilon = 1e-5
                );
            }
        }
    }
}

mod timing {
    use super::*;

    #[test]
    fn frame_count_change_takes_priority_over_animation_duration() {
        let mut timing = FrameTiming::new(0.1, 0.4);
        timing.reconcile(4);

        timing.set_animation_duration(1.0);
        let source = timing.reconcile(5);

        assert_eq!(source, Some(TimingSource::FrameCount));
        assert_relative_eq!(timing.animation_duration(), 0.5);
        assert_relative_eq!(timing.frame_duration(), 0.1);
    }

    #[test]
    fn editing_loop_duration_retimes_frames() {
        let mut sequencer = FrameSequencer::new(0.1);
        sequencer.tick(0.0, 5);

        sequencer.set_animation_duration(5.0);
        let frames = run_sequencer(&mut sequencer, 5, 0.6, 4);

        assert_eq!(frames, &[0, 1, 1, 2]);
        assert_relative_eq!(sequencer.frame_duration(), 1.0);
    }
}

mod random_start {
    use super::*;

    #[test]
    fn seeded_start_positions_are_bounded_and_spread() {
        let mut sequencer = FrameSequencer::builder()
            .frame_duration(0.2)
            .start_on_random_time(true)
            .build()
            .unwrap();
        let mut rng = StdRng::seed_from_u64(2024);
        let mut seen = [false; 6];

        for _ in 0..10_000 {
            sequencer.initialize(6, &mut rng);
            let frame = sequencer.current_frame();
            assert!(frame < 6);
            assert!((0.0..0.2).contains(&sequencer.time_since_current_frame()));
            seen[frame] = true;
        }

        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn flipbook_initializes_with_its_own_frame_count() {
        let sequencer = FrameSequencer::builder()
            .start_on_random_time(true)
            .build()
            .unwrap();
        let mut flipbook = Flipbook::new(vec!["idle_0", "idle_1"], sequencer);
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..100 {
            flipbook.initialize(&mut rng);
            assert!(flipbook.active_frame().is_some());
        }
    }
}

mod degenerate {
    use super::*;

    #[test]
    fn paused_sequence_accumulates_time() {
        let mut sequencer = FrameSequencer::new(0.0);

        let frames = run_sequencer(&mut sequencer, 4, 0.25, 8);

        assert!(frames.iter().all(|f| *f == 0));
        assert_relative_eq!(sequencer.time_since_current_frame(), 2.0);
    }

    #[test]
    fn resumes_after_duration_becomes_positive() {
        let mut sequencer = FrameSequencer::new(0.0);
        run_sequencer(&mut sequencer, 4, 0.25, 2);

        sequencer.set_frame_duration(0.2);
        let outcome = sequencer.tick(0.0, 4);

        assert_eq!(outcome.reconciled, Some(TimingSource::FrameDuration));
        assert_eq!(outcome.advances, 2);
        assert_eq!(outcome.active_frame, Some(2));
    }

    #[test]
    fn empty_sequence_never_changes() {
        let mut flipbook: Flipbook<()> = Flipbook::with_frame_duration(Vec::new(), 0.1);

        for _ in 0..5 {
            assert_eq!(flipbook.tick(0.3), TickOutcome::default());
        }
        assert_eq!(flipbook.sequencer().current_frame(), 0);
        assert_eq!(flipbook.sequencer().time_since_current_frame(), 0.0);
        assert_eq!(flipbook.visibility().filter(|(_, v)| v.is_visible()).count(), 0);
    }
}
