//! Blocking input reader.
//!
//! Reads run on a dedicated OS thread because a terminal read blocks until the
//! next key press and cannot be cancelled. Decoded events go out on an
//! unbounded channel in delivery order; nothing is dropped while the loop is
//! busy.

use std::io::{self, Read};
use std::thread::{self, JoinHandle};

use log::{debug, trace, warn};
use tokio::sync::mpsc::UnboundedSender;

use crate::decode::InputDecoder;
use crate::types::InputEvent;

/// Bytes requested per read
pub const READ_CHUNK: usize = 16;

/// Start the reader thread.
///
/// The thread ends at end of input, on a read error, or after the first read
/// following the receiver being dropped. Otherwise it lives until the process
/// exits.
pub fn spawn_reader<R>(mut source: R, tx: UnboundedSender<InputEvent>) -> io::Result<JoinHandle<()>>
where
    R: Read + Send + 'static,
{
    thread::Builder::new()
        .name("snake-input".to_string())
        .spawn(move || {
            if let Err(e) = read_loop(&mut source, &tx) {
                warn!("[Input] reader stopped: {}", e);
            }
        })
}

/// Read, decode and forward until the source or the channel closes.
pub fn read_loop<R: Read>(source: &mut R, tx: &UnboundedSender<InputEvent>) -> io::Result<()> {
    let mut decoder = InputDecoder::new();
    let mut buf = [0u8; READ_CHUNK];

    loop {
        let n = match source.read(&mut buf) {
            Ok(0) => {
                debug!("[Input] end of input");
                return Ok(());
            }
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        for event in decoder.decode(&buf[..n]) {
            trace!("[Input] {:?}", event);
            if tx.send(event).is_err() {
                debug!("[Input] control loop gone, stopping reader");
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;
    use std::io::Cursor;
    use tokio::sync::mpsc;

    /// Hands out one byte per read, like a terminal delivering keys slowly.
    struct Trickle(Vec<u8>, usize);

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.1 >= self.0.len() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.0[self.1];
            self.1 += 1;
            Ok(1)
        }
    }

    #[test]
    fn test_read_loop_forwards_in_order() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut source = Cursor::new(b"\x1b[Bzz\x1b[Dq".to_vec());

        read_loop(&mut source, &tx).unwrap();
        drop(tx);

        let mut events = Vec::new();
        while let Some(ev) = rx.blocking_recv() {
            events.push(ev);
        }
        assert_eq!(
            events,
            vec![
                InputEvent::Direction(Direction::Down),
                InputEvent::Direction(Direction::Left),
                InputEvent::Quit,
            ]
        );
    }

    #[test]
    fn test_read_loop_handles_byte_at_a_time() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut source = Trickle(b"\x1b[A".to_vec(), 0);

        read_loop(&mut source, &tx).unwrap();

        assert_eq!(rx.try_recv().unwrap(), InputEvent::Direction(Direction::Up));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_read_loop_stops_when_receiver_dropped() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let mut source = Cursor::new(b"qqqq".to_vec());

        assert!(read_loop(&mut source, &tx).is_ok());
    }

    #[test]
    fn test_spawned_reader_closes_channel_at_eof() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = spawn_reader(Cursor::new(b"\x1b[C".to_vec()), tx).unwrap();

        assert_eq!(
            rx.blocking_recv(),
            Some(InputEvent::Direction(Direction::Right))
        );
        assert_eq!(rx.blocking_recv(), None);
        handle.join().unwrap();
    }
}
