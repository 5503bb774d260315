//! Console Tests.

use ls8_core::core::cpu::trace::TraceSnapshot;
use ls8_core::soc::devices::BufferedConsole;
use ls8_core::soc::{NullSink, OutputSink, TraceSink};

#[test]
fn buffered_console_renders_like_stdout() {
    let mut console = BufferedConsole::new();
    console.print_number(8);
    console.print_char(b'o');
    console.print_char(b'k');
    console.print_char(b'\n');
    console.print_number(255);

    assert_eq!(console.numbers, vec![8, 255]);
    assert_eq!(console.text(), "8\nok\n255\n");
    assert_eq!(console.lines(), vec!["8", "ok", "255"]);
}

#[test]
fn buffered_console_keeps_raw_bytes() {
    let mut console = BufferedConsole::new();
    console.print_char(0xC8);
    console.print_char(b'A');
    console.print_char(0xFF);

    assert_eq!(console.bytes, vec![0xC8, b'A', 0xFF]);
    assert_eq!(console.text(), "\u{FFFD}A\u{FFFD}");
}

#[test]
fn buffered_console_records_trace_lines() {
    let mut console = BufferedConsole::new();
    console.record(&TraceSnapshot {
        pc: 0x10,
        bytes: [0x47, 0x01, 0x00],
        regs: [1, 2, 3, 4, 5, 6, 7, 0xF4],
    });
    assert_eq!(
        console.trace,
        vec!["TRACE: 10 | 47 01 00 | 01 02 03 04 05 06 07 F4"]
    );
}

#[test]
fn null_sink_accepts_everything() {
    let mut sink = NullSink;
    sink.print_number(1);
    sink.print_char(b'a');
    sink.record(&TraceSnapshot {
        pc: 0,
        bytes: [0; 3],
        regs: [0; 8],
    });
}
