//! # Integration Tests
//!
//! End-to-end and cross-crate scenario tests.
//!
//! Covers:
//! - Windowed aggregation / resampling / cursor scenarios
//! - Pipeline determinism and error surfacing
//! - Config file -> history -> render -> sink runs on disk

#[cfg(test)]
mod scenario_tests {
    use std::sync::Arc;

    use contracts::{Frame, HistorySnapshot, PlaybackCursor, ReadingGrid, ResampleMethod};
    use heatmap::{median_window, resampler_for};
    use nalgebra::DMatrix;
    use playback::{move_backward, move_forward};

    /// Uniform 2x2 frames at t = 0, 10, 20, 30, 40 holding values 1..=5.
    fn stepped_history() -> HistorySnapshot {
        HistorySnapshot::new(
            (0..5)
                .map(|i| {
                    Arc::new(Frame::new(
                        i as f64 * 10.0,
                        ReadingGrid::filled(2, 2, i as i32 + 1),
                    ))
                })
                .collect(),
        )
    }

    #[test]
    fn test_window_selects_inclusive_span_and_upper_median() {
        let snap = stepped_history();
        let current = snap.get(3).unwrap(); // t = 30, value 4

        // Window [15, 30] captures t = 20 and t = 30 -> values {3, 4};
        // the even-count median picks the upper of the middle pair.
        let aggregate = median_window(&snap, current, 15.0).unwrap();
        assert_eq!(aggregate.frame_count, 2);
        for r in 0..2 {
            for c in 0..2 {
                assert_eq!(aggregate.grid[(r, c)], 4.0);
            }
        }
    }

    #[test]
    fn test_window_boundary_frame_is_included() {
        let snap = stepped_history();
        let current = snap.get(3).unwrap();

        // Window [10, 30]: the frame sitting exactly on t_start counts.
        let aggregate = median_window(&snap, current, 20.0).unwrap();
        assert_eq!(aggregate.frame_count, 3);
        // Values {2, 3, 4} -> middle element 3
        assert_eq!(aggregate.grid[(0, 0)], 3.0);
    }

    #[test]
    fn test_upscale_corners_pin_to_source_corners() {
        let src = DMatrix::from_row_slice(2, 2, &[0.0, 100.0, 100.0, 200.0]);
        let out = resampler_for(ResampleMethod::Bilinear)
            .resample(&src, 4, 4)
            .unwrap();

        assert_eq!(out[(0, 0)], 0.0);
        assert_eq!(out[(0, 3)], 100.0);
        assert_eq!(out[(3, 0)], 100.0);
        assert_eq!(out[(3, 3)], 200.0);
        for r in 1..3 {
            for c in 1..3 {
                let v = out[(r, c)];
                assert!(v > 0.0 && v < 200.0, "interior value {v} escaped range");
            }
        }
    }

    #[test]
    fn test_cursor_clamps_at_both_history_boundaries() {
        let snap = stepped_history();

        let cursor = move_forward(&snap, PlaybackCursor::new(2), 10).unwrap();
        assert_eq!(cursor.index, 4);

        let cursor = move_backward(&snap, cursor, 10).unwrap();
        assert_eq!(cursor.index, 0);
    }
}

#[cfg(test)]
mod pipeline_tests {
    use std::sync::Arc;

    use contracts::{
        ColorRampProvider, Frame, HistorySnapshot, PlaybackCursor, ReadingGrid, ReplayError,
        ResampleMethod,
    };
    use heatmap::{render, RenderOptions};
    use ramp_store::RampStore;

    fn options(ramp: &str) -> RenderOptions {
        RenderOptions {
            window_s: 1.0,
            target_width: 16,
            target_height: 16,
            method: ResampleMethod::Bilinear,
            ramp: ramp.to_string(),
            range_min: 0.0,
            range_max: 1024.0,
        }
    }

    fn uniform_snapshot(value: i32) -> HistorySnapshot {
        HistorySnapshot::new(vec![Arc::new(Frame::new(
            0.0,
            ReadingGrid::filled(4, 4, value),
        ))])
    }

    #[test]
    fn test_render_is_deterministic_across_invocations() {
        let ramps = RampStore::with_builtins();
        let snap = uniform_snapshot(600);
        let opts = options("jet");

        let a = render(&snap, PlaybackCursor::new(0), 0, &opts, &ramps).unwrap();
        let b = render(&snap, PlaybackCursor::new(0), 0, &opts, &ramps).unwrap();
        assert_eq!(a.pixels.to_rgba8_bytes(), b.pixels.to_rgba8_bytes());
    }

    #[test]
    fn test_range_extremes_hit_ramp_ends() {
        let ramps = RampStore::with_builtins();
        let opts = options("grayscale");
        let ramp = ramps.ramp("grayscale").unwrap();

        let low = render(
            &uniform_snapshot(0),
            PlaybackCursor::new(0),
            0,
            &opts,
            &ramps,
        )
        .unwrap();
        let high = render(
            &uniform_snapshot(1024),
            PlaybackCursor::new(0),
            0,
            &opts,
            &ramps,
        )
        .unwrap();

        // Color channels pin to the ramp ends; the zero frame additionally
        // falls under the near-zero transparency rule.
        let first = ramp.color_at(0);
        let last = ramp.color_at(ramp.len() - 1);
        assert_eq!(low.pixels.pixel(0, 0).r, first.r);
        assert_eq!(high.pixels.pixel(0, 0), last);
    }

    #[test]
    fn test_idle_pad_renders_translucent() {
        let ramps = RampStore::with_builtins();
        let frame = render(
            &uniform_snapshot(0),
            PlaybackCursor::new(0),
            0,
            &options("jet"),
            &ramps,
        )
        .unwrap();

        // Alpha 0.1 quantizes to byte 26 in the encoded output
        let bytes = frame.pixels.to_rgba8_bytes();
        assert!(bytes.chunks_exact(4).all(|px| px[3] == 26));
    }

    #[test]
    fn test_empty_history_surfaces_as_error() {
        let ramps = RampStore::with_builtins();
        let err = render(
            &HistorySnapshot::default(),
            PlaybackCursor::new(0),
            0,
            &options("jet"),
            &ramps,
        )
        .unwrap_err();
        assert!(matches!(err, ReplayError::EmptyHistory));
    }
}

#[cfg(test)]
mod e2e_tests {
    use contracts::PlaybackCursor;
    use dispatcher::Dispatcher;
    use heatmap::{render, RenderOptions};
    use ramp_store::RampStore;

    /// Config file -> synthetic history -> render loop -> PNG sink on disk.
    #[test]
    fn test_e2e_synthetic_replay_writes_png_frames() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let config_path = dir.path().join("replay.toml");
        std::fs::write(
            &config_path,
            format!(
                r#"
                [sensor]
                id = "pad"
                rows = 8
                cols = 8
                min_value = 0.0
                max_value = 1024.0

                [source]
                kind = "synthetic"
                frame_count = 4
                interval_s = 0.1

                [render]
                window_s = 0.25
                target_width = 32
                target_height = 32
                method = "cosine"
                ramp = "viridis"

                [[sinks]]
                name = "png"
                sink_type = "png"

                [sinks.params]
                base_path = "{}"
                "#,
                out.display()
            ),
        )
        .unwrap();

        let blueprint = config_loader::ConfigLoader::load_from_path(&config_path).unwrap();
        let ramps = RampStore::with_builtins();
        let history = ingestion::build_history(&blueprint.source, &blueprint.sensor).unwrap();
        let snapshot = history.snapshot();
        let mut dispatcher = Dispatcher::from_configs(&blueprint.sinks);
        let options = RenderOptions::from_blueprint(&blueprint);

        let mut cursor = PlaybackCursor::new(0);
        for frame_id in 0..snapshot.len() as u64 {
            let frame = render(&snapshot, cursor, frame_id, &options, &ramps).unwrap();
            assert_eq!(frame.pixels.width(), 32);
            assert_eq!(dispatcher.dispatch(&frame), 0);
            cursor = playback::move_forward(&snapshot, cursor, 1).unwrap();
        }
        dispatcher.flush_all().unwrap();
        dispatcher.close_all();

        // One run directory holding frames/ PNGs and meta/ JSON
        let run_dir = std::fs::read_dir(&out).unwrap().next().unwrap().unwrap();
        let frames: Vec<_> = std::fs::read_dir(run_dir.path().join("frames"))
            .unwrap()
            .collect();
        let metas: Vec<_> = std::fs::read_dir(run_dir.path().join("meta"))
            .unwrap()
            .collect();
        assert_eq!(frames.len(), 4);
        assert_eq!(metas.len(), 4);

        let metrics = dispatcher.metrics();
        assert_eq!(metrics[0].1.write_count(), 4);
        assert_eq!(metrics[0].1.failure_count(), 0);
    }

    /// Recording saved to disk replays identically to the in-memory history.
    #[test]
    fn test_recording_round_trips_through_jsonl() {
        use contracts::{Frame, ReadingGrid};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.jsonl");

        let frames: Vec<Frame> = (0..3)
            .map(|i| Frame::new(i as f64 * 0.5, ReadingGrid::filled(2, 3, i * 100)))
            .collect();
        ingestion::save_frames(&path, &frames).unwrap();

        let loaded = ingestion::load_frames(&path).unwrap();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[1].timestamp, 0.5);
        assert_eq!(loaded[2].readings.get(1, 2), 200);
    }
}
