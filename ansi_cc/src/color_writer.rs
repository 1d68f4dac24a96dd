/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use std::{fmt,
          io::{self, Stdout, Write}};

use crate::{AnsiColor, JoinRule, Operand, render_arguments, render_operands, sorted_colors};

/// Every colored write is exactly three writes to the sink, in this order:
/// 1. the escape sequence of `color` (the prefix),
/// 2. the rendered payload,
/// 3. the escape sequence of [`AnsiColor::Reset`].
///
/// The first failed write ends the operation and its [`io::Error`] is returned as is. So
/// if the payload write fails, the reset is never written and the sink is left in
/// `color`. On success the returned count is the number of bytes in the last write,
/// which is the length of the reset sequence.
///
/// Each part goes through [`Write::write_all`], so a short write is continued with
/// more sink calls and [`io::ErrorKind::Interrupted`] is retried. Every other error is
/// passed through. An empty payload is still handed to the sink as one zero-length
/// write, since [`Write::write_all`] would skip it.
///
/// The payload is rendered before the prefix is written. A failing [Display] impl
/// therefore writes nothing, and is reported as [`io::ErrorKind::Other`].
///
/// [Display]: std::fmt::Display
fn write_colored<W: Write + ?Sized>(
    color: AnsiColor,
    sink: &mut W,
    payload: &[u8],
) -> io::Result<usize> {
    if let Err(err) = sink.write_all(color.as_bytes()) {
        tracing::debug!(color = color.name(), %err, "color prefix write failed");
        return Err(err);
    }

    let payload_result = if payload.is_empty() {
        sink.write(payload).map(|_| ())
    } else {
        sink.write_all(payload)
    };
    if let Err(err) = payload_result {
        tracing::debug!(
            color = color.name(),
            %err,
            "payload write failed, reset sequence not written"
        );
        return Err(err);
    }

    let reset = AnsiColor::Reset.as_bytes();
    sink.write_all(reset)?;
    Ok(reset.len())
}

fn into_io_error(err: fmt::Error) -> io::Error { io::Error::other(err) }

/// Write `operands` to `sink` wrapped in `color`. Operands are joined using
/// [`JoinRule::Print`].
///
/// # Errors
///
/// Returns the [`io::Error`] of the first sink write that fails. Nothing after the
/// failed write is attempted, so a failed payload write leaves the sink in `color`.
pub fn fprint<W: Write + ?Sized>(
    color: AnsiColor,
    sink: &mut W,
    operands: &[Operand<'_>],
) -> io::Result<usize> {
    let payload = render_operands(operands, JoinRule::Print).map_err(into_io_error)?;
    write_colored(color, sink, payload.as_bytes())
}

/// Write the result of `args` (built with [`format_args!`]) to `sink` wrapped in
/// `color`.
///
/// # Errors
///
/// Returns the [`io::Error`] of the first sink write that fails.
pub fn fprintf<W: Write + ?Sized>(
    color: AnsiColor,
    sink: &mut W,
    args: fmt::Arguments<'_>,
) -> io::Result<usize> {
    let payload = render_arguments(args).map_err(into_io_error)?;
    write_colored(color, sink, payload.as_bytes())
}

/// Write `operands` followed by a newline to `sink` wrapped in `color`. Operands are
/// joined using [`JoinRule::Println`]. The newline is written before the reset
/// sequence.
///
/// # Errors
///
/// Returns the [`io::Error`] of the first sink write that fails.
pub fn fprintln<W: Write + ?Sized>(
    color: AnsiColor,
    sink: &mut W,
    operands: &[Operand<'_>],
) -> io::Result<usize> {
    let payload = render_operands(operands, JoinRule::Println).map_err(into_io_error)?;
    write_colored(color, sink, payload.as_bytes())
}

/// Binds an output sink so that colored text can be written to it repeatedly. The color
/// is chosen per call.
///
/// The sink is never closed or flushed by this type. Pass `&mut W` to keep ownership of
/// the sink, or use [`ColorWriter::into_inner()`] to get it back.
///
/// # Example usage:
///
/// ```rust
/// use r3bl_ansi_cc::{AnsiColor, ColorWriter, operands};
///
/// let mut buffer: Vec<u8> = vec![];
/// let mut writer = ColorWriter::new(&mut buffer);
/// writer.println(AnsiColor::Red, &operands!["hello"]).unwrap();
/// writer.printf(AnsiColor::Green, format_args!("{} items", 3)).unwrap();
///
/// assert_eq!(buffer, b"\x1b[0;31mhello\n\x1b[0m\x1b[0;32m3 items\x1b[0m");
/// ```
#[derive(Debug)]
pub struct ColorWriter<W: Write> {
    out: W,
}

impl ColorWriter<Stdout> {
    /// A writer bound to the process's standard output. It is cheap to create, so the
    /// free functions in this crate make one per call.
    #[must_use]
    pub fn stdout() -> Self { Self::new(io::stdout()) }
}

impl<W: Write> ColorWriter<W> {
    #[must_use]
    pub fn new(out: W) -> Self { Self { out } }

    /// See [`fprint()`].
    ///
    /// # Errors
    ///
    /// Returns the [`io::Error`] of the first sink write that fails.
    pub fn print(&mut self, color: AnsiColor, operands: &[Operand<'_>]) -> io::Result<usize> {
        fprint(color, &mut self.out, operands)
    }

    /// See [`fprintf()`].
    ///
    /// # Errors
    ///
    /// Returns the [`io::Error`] of the first sink write that fails.
    pub fn printf(&mut self, color: AnsiColor, args: fmt::Arguments<'_>) -> io::Result<usize> {
        fprintf(color, &mut self.out, args)
    }

    /// See [`fprintln()`].
    ///
    /// # Errors
    ///
    /// Returns the [`io::Error`] of the first sink write that fails.
    pub fn println(
        &mut self,
        color: AnsiColor,
        operands: &[Operand<'_>],
    ) -> io::Result<usize> {
        fprintln(color, &mut self.out, operands)
    }

    /// Write one line per known color, in sorted name order. Each line is the color's
    /// name written in that color.
    ///
    /// # Errors
    ///
    /// Stops at the first line that fails and returns its [`io::Error`].
    pub fn print_available_colors(&mut self) -> io::Result<()> {
        for (name, color) in sorted_colors() {
            self.println(color, &[Operand::Str(name)])?;
        }
        Ok(())
    }

    #[must_use]
    pub fn get_ref(&self) -> &W { &self.out }

    pub fn get_mut(&mut self) -> &mut W { &mut self.out }

    #[must_use]
    pub fn into_inner(self) -> W { self.out }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{operands, sorted_color_names};

    const RESET: &str = "\x1b[0m";

    /// Records every call to [`Write::write`] as a separate chunk.
    #[derive(Debug, Default)]
    struct RecordingSink {
        chunks: Vec<Vec<u8>>,
    }

    impl Write for RecordingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.chunks.push(buf.to_vec());
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> { Ok(()) }
    }

    /// Accepts writes until the write numbered `fail_on_write` (1 based), which fails
    /// with [`io::ErrorKind::BrokenPipe`].
    #[derive(Debug)]
    struct FailingSink {
        fail_on_write: usize,
        write_count: usize,
        written: Vec<u8>,
    }

    impl FailingSink {
        fn new(fail_on_write: usize) -> Self {
            Self {
                fail_on_write,
                write_count: 0,
                written: vec![],
            }
        }
    }

    impl Write for FailingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.write_count += 1;
            if self.write_count == self.fail_on_write {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> { Ok(()) }
    }

    struct FailingDisplay;

    impl fmt::Display for FailingDisplay {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result { Err(fmt::Error) }
    }

    fn as_string(bytes: &[u8]) -> String { String::from_utf8_lossy(bytes).to_string() }

    #[test]
    fn println_red_hello() {
        let mut sink: Vec<u8> = vec![];
        let count = fprintln(AnsiColor::Red, &mut sink, &operands!["hello"]).unwrap();
        assert_eq!(as_string(&sink), "\x1b[0;31mhello\n\x1b[0m");
        assert_eq!(count, RESET.len());
    }

    #[test]
    fn printf_green_items() {
        let mut sink: Vec<u8> = vec![];
        fprintf(AnsiColor::Green, &mut sink, format_args!("{} items", 3)).unwrap();
        assert_eq!(as_string(&sink), "\x1b[0;32m3 items\x1b[0m");
    }

    #[test]
    fn print_joins_with_print_rules() {
        let mut sink: Vec<u8> = vec![];
        fprint(AnsiColor::Blue, &mut sink, &operands![1, 2, "x", 3]).unwrap();
        assert_eq!(as_string(&sink), "\x1b[0;34m1 2x3\x1b[0m");
    }

    #[test]
    fn println_joins_with_println_rules() {
        let mut sink: Vec<u8> = vec![];
        fprintln(AnsiColor::Yellow, &mut sink, &operands!["a", "b", 1]).unwrap();
        assert_eq!(as_string(&sink), "\x1b[1;33ma b 1\n\x1b[0m");
    }

    #[test]
    fn reset_color_still_writes_three_parts() {
        let mut sink: Vec<u8> = vec![];
        fprint(AnsiColor::Reset, &mut sink, &operands!["plain"]).unwrap();
        assert_eq!(as_string(&sink), "\x1b[0mplain\x1b[0m");
    }

    #[test]
    fn exactly_three_ordered_writes() {
        let mut sink = RecordingSink::default();
        fprintln(AnsiColor::LightCyan, &mut sink, &operands!["a", 1, 2.5]).unwrap();
        assert_eq!(
            sink.chunks,
            vec![
                b"\x1b[1;36m".to_vec(),
                b"a 1 2.5\n".to_vec(),
                RESET.as_bytes().to_vec(),
            ]
        );

        let mut sink = RecordingSink::default();
        fprintf(AnsiColor::Purple, &mut sink, format_args!("{:>3}|", 7)).unwrap();
        assert_eq!(sink.chunks.len(), 3);
        assert_eq!(sink.chunks[1], b"  7|".to_vec());
    }

    #[test]
    fn empty_payload_is_still_one_write() {
        let mut sink = RecordingSink::default();
        fprint(AnsiColor::Red, &mut sink, &[]).unwrap();
        assert_eq!(
            sink.chunks,
            vec![b"\x1b[0;31m".to_vec(), vec![], RESET.as_bytes().to_vec()]
        );

        let mut sink = RecordingSink::default();
        fprintf(AnsiColor::Red, &mut sink, format_args!("")).unwrap();
        assert_eq!(sink.chunks.len(), 3);
        assert!(sink.chunks[1].is_empty());
    }

    #[test]
    fn empty_payload_failure_skips_reset() {
        let mut sink = FailingSink::new(2);
        let err = fprint(AnsiColor::Green, &mut sink, &[]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(sink.write_count, 2);
        assert_eq!(as_string(&sink.written), "\x1b[0;32m");
    }

    /// Fails the first call with [`io::ErrorKind::Interrupted`], then accepts at most
    /// `max_len` bytes per call.
    #[derive(Debug)]
    struct InterruptedShortSink {
        interrupted: bool,
        max_len: usize,
        write_count: usize,
        written: Vec<u8>,
    }

    impl Write for InterruptedShortSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.write_count += 1;
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::ErrorKind::Interrupted.into());
            }
            let len = buf.len().min(self.max_len);
            self.written.extend_from_slice(&buf[..len]);
            Ok(len)
        }

        fn flush(&mut self) -> io::Result<()> { Ok(()) }
    }

    #[test]
    fn interrupted_and_short_writes_are_continued() {
        let mut sink = InterruptedShortSink {
            interrupted: false,
            max_len: 3,
            write_count: 0,
            written: vec![],
        };
        let count = fprint(AnsiColor::Red, &mut sink, &operands!["hello"]).unwrap();
        assert_eq!(count, RESET.len());
        assert_eq!(as_string(&sink.written), "\x1b[0;31mhello\x1b[0m");
        // 1 interrupted + prefix (7 bytes) in 3 + payload (5) in 2 + reset (4) in 2.
        assert_eq!(sink.write_count, 8);
    }

    #[test]
    fn prefix_failure_writes_nothing() {
        let mut sink = FailingSink::new(1);
        let err = fprint(AnsiColor::Red, &mut sink, &operands!["hello"]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(sink.write_count, 1);
        assert!(sink.written.is_empty());
    }

    #[test]
    fn payload_failure_skips_reset() {
        let mut sink = FailingSink::new(2);
        let err = fprintln(AnsiColor::Red, &mut sink, &operands!["hello"]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(sink.write_count, 2);
        assert_eq!(as_string(&sink.written), "\x1b[0;31m");
    }

    #[test]
    fn reset_failure_is_reported_after_text_was_written() {
        let mut sink = FailingSink::new(3);
        let err =
            fprintf(AnsiColor::Green, &mut sink, format_args!("{} items", 3)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(sink.write_count, 3);
        assert_eq!(as_string(&sink.written), "\x1b[0;32m3 items");
    }

    #[test]
    fn failing_display_writes_nothing() {
        let mut sink = RecordingSink::default();
        let failing = FailingDisplay;
        let err =
            fprint(AnsiColor::Red, &mut sink, &[Operand::display(&failing)]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert!(sink.chunks.is_empty());
    }

    #[test]
    fn color_writer_borrows_sink() {
        let mut buffer: Vec<u8> = vec![];
        {
            let mut writer = ColorWriter::new(&mut buffer);
            writer.print(AnsiColor::Orange, &operands!["warn:", 42]).unwrap();
            assert_eq!(as_string(writer.get_ref()), "\x1b[0;33mwarn:42\x1b[0m");
            writer.get_mut().clear();
            writer.println(AnsiColor::White, &operands![]).unwrap();
        }
        assert_eq!(as_string(&buffer), "\x1b[1;37m\n\x1b[0m");
    }

    #[test]
    fn color_writer_into_inner_returns_sink() {
        let mut writer = ColorWriter::new(Vec::<u8>::new());
        writer
            .printf(AnsiColor::DarkGray, format_args!("{}-{}", "a", 'b'))
            .unwrap();
        assert_eq!(as_string(&writer.into_inner()), "\x1b[1;30ma-b\x1b[0m");
    }

    #[test]
    fn print_available_colors_writes_each_name_in_its_own_color() {
        let mut writer = ColorWriter::new(RecordingSink::default());
        writer.print_available_colors().unwrap();

        let chunks = writer.into_inner().chunks;
        assert_eq!(chunks.len(), 17 * 3);

        for (line, name) in chunks.chunks(3).zip(sorted_color_names()) {
            let color: AnsiColor = name.parse().unwrap();
            assert_eq!(line[0], color.as_bytes().to_vec());
            assert_eq!(as_string(&line[1]), format!("{name}\n"));
            assert_eq!(line[2], RESET.as_bytes().to_vec());
        }
    }

    #[test]
    fn print_available_colors_stops_at_first_failure() {
        let mut writer = ColorWriter::new(FailingSink::new(5));
        let err = writer.print_available_colors().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        // First line ("black") complete, then the prefix of "blue" and the failed payload.
        assert_eq!(
            as_string(&writer.into_inner().written),
            "\x1b[0;30mblack\n\x1b[0m\x1b[0;34m"
        );
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> { Ok(()) }
    }

    #[test]
    fn payload_failure_is_logged() {
        let logs = CapturedLogs::default();
        let make_writer = {
            let logs = logs.clone();
            move || logs.clone()
        };
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing_core::LevelFilter::DEBUG)
            .with_ansi(false)
            .with_writer(make_writer)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut sink = FailingSink::new(2);
            fprint(AnsiColor::LightRed, &mut sink, &operands!["boom"]).unwrap_err();
        });

        let output = as_string(&logs.0.lock().unwrap());
        assert!(output.contains("reset sequence not written"));
        assert!(output.contains("light-red"));
    }
}
