use std::thread;
use std::time::Duration;

use pretty_assertions::assert_eq;
use uniplot_spark::FixedWidth;
use uniplot_spark::SparkStream;
use uniplot_spark::Unit;
use unicode_width::UnicodeWidthStr;

use super::SharedBuffer;

#[test]
fn samples_added_before_start_appear_in_first_frame() {
    let output = SharedBuffer::default();
    let mut stream = SparkStream::new(Duration::from_millis(250));
    stream.set_output(output.clone()).unwrap();
    stream.set_terminal(FixedWidth(40)).unwrap();

    thread::scope(|scope| {
        for _ in 0..100 {
            let sampler = stream.sampler();
            scope.spawn(move || sampler.add(1.0));
        }
    });

    stream.start();
    let frames = output.wait_for_frames(1, Duration::from_secs(5));
    stream.stop();

    assert_eq!(frames[0], format!("▁{} 400.000/s", " ".repeat(29)));
    assert_eq!(frames[0].width(), 40);
}

#[test]
fn no_frames_after_stop() {
    let output = SharedBuffer::default();
    let mut stream = SparkStream::new(Duration::from_millis(10));
    stream.set_output(output.clone()).unwrap();
    stream.set_terminal(FixedWidth(30)).unwrap();
    stream.start();
    stream.add(1.0);
    output.wait_for_frames(2, Duration::from_secs(5));
    stream.stop();

    let drawn = output.contents();
    stream.add(5.0);
    thread::sleep(Duration::from_millis(50));
    assert_eq!(output.contents(), drawn);
    assert!(!stream.is_running());
}

#[test]
fn every_frame_fills_the_terminal() {
    let output = SharedBuffer::default();
    let mut stream = SparkStream::new(Duration::from_millis(5));
    stream.set_output(output.clone()).unwrap();
    stream.set_terminal(FixedWidth(24)).unwrap();
    stream.set_unit(Unit::Bytes).unwrap();
    let sampler = stream.sampler();
    stream.start();

    for value in 0..50 {
        sampler.add(f64::from(value % 7) * 1000.0);
        thread::sleep(Duration::from_millis(1));
    }
    output.wait_for_frames(10, Duration::from_secs(5));
    stream.stop();

    let frames = output.frames();
    assert!(frames.len() >= 10, "only {} frames drawn", frames.len());
    for frame in frames {
        assert_eq!(frame.width(), 24, "{frame:?}");
        assert!(frame.ends_with("B/s"), "{frame:?}");
    }
}

#[test]
fn dropping_a_running_stream_stops_it() {
    let output = SharedBuffer::default();
    {
        let mut stream = SparkStream::new(Duration::from_millis(5));
        stream.set_output(output.clone()).unwrap();
        stream.set_terminal(FixedWidth(20)).unwrap();
        stream.start();
        output.wait_for_frames(1, Duration::from_secs(5));
    }
    let drawn = output.contents();
    thread::sleep(Duration::from_millis(30));
    assert_eq!(output.contents(), drawn);
}
