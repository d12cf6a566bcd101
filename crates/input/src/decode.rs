//! Byte decoder for the keyboard protocol.
//!
//! - `ESC [ A` / `B` / `C` / `D`: Up / Down / Right / Left
//! - `q` / `Q`: quit
//! - anything else is dropped
//!
//! The decoder is streaming: an escape sequence split across two reads is
//! still recognised, and several keys arriving in one read all decode.

use crate::types::{Direction, InputEvent};

const ESC: u8 = 0x1b;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Ground,
    /// Saw ESC
    Escape,
    /// Saw ESC `[`; `params` is set once a parameter byte appeared
    Csi { params: bool },
}

#[derive(Debug, Clone)]
pub struct InputDecoder {
    state: State,
}

impl InputDecoder {
    pub fn new() -> Self {
        Self {
            state: State::Ground,
        }
    }

    /// Feed one byte; returns an event when a key completes.
    pub fn feed(&mut self, byte: u8) -> Option<InputEvent> {
        match self.state {
            State::Ground => self.ground(byte),
            State::Escape => match byte {
                b'[' => {
                    self.state = State::Csi { params: false };
                    None
                }
                ESC => None,
                // Lone ESC press followed by an ordinary key.
                _ => {
                    self.state = State::Ground;
                    self.ground(byte)
                }
            },
            State::Csi { params } => match byte {
                // Parameter and intermediate bytes (e.g. modifiers in `ESC [1;5A`).
                0x20..=0x3f => {
                    self.state = State::Csi { params: true };
                    None
                }
                0x40..=0x7e => {
                    self.state = State::Ground;
                    if params {
                        None
                    } else {
                        arrow(byte).map(InputEvent::Direction)
                    }
                }
                _ => {
                    self.state = State::Ground;
                    None
                }
            },
        }
    }

    /// Decode a chunk of bytes as read from the terminal.
    pub fn decode<'a>(&'a mut self, chunk: &'a [u8]) -> impl Iterator<Item = InputEvent> + 'a {
        chunk.iter().filter_map(move |&b| self.feed(b))
    }

    fn ground(&mut self, byte: u8) -> Option<InputEvent> {
        match byte {
            ESC => {
                self.state = State::Escape;
                None
            }
            b'q' | b'Q' => Some(InputEvent::Quit),
            _ => None,
        }
    }
}

impl Default for InputDecoder {
    fn default() -> Self {
        Self::new()
    }
}

fn arrow(final_byte: u8) -> Option<Direction> {
    match final_byte {
        b'A' => Some(Direction::Up),
        b'B' => Some(Direction::Down),
        b'C' => Some(Direction::Right),
        b'D' => Some(Direction::Left),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_all(bytes: &[u8]) -> Vec<InputEvent> {
        let mut decoder = InputDecoder::new();
        decoder.decode(bytes).collect()
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(decode_all(b"\x1b[A"), vec![InputEvent::Direction(Direction::Up)]);
        assert_eq!(decode_all(b"\x1b[B"), vec![InputEvent::Direction(Direction::Down)]);
        assert_eq!(decode_all(b"\x1b[C"), vec![InputEvent::Direction(Direction::Right)]);
        assert_eq!(decode_all(b"\x1b[D"), vec![InputEvent::Direction(Direction::Left)]);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(decode_all(b"q"), vec![InputEvent::Quit]);
        assert_eq!(decode_all(b"Q"), vec![InputEvent::Quit]);
    }

    #[test]
    fn test_other_bytes_dropped() {
        assert!(decode_all(b"x").is_empty());
        assert!(decode_all(b"wasd").is_empty());
        assert!(decode_all(b"\x1b[E").is_empty());
        assert!(decode_all(b"\x1b[1;5A").is_empty());
        assert!(decode_all(b"\r\n ").is_empty());
    }

    #[test]
    fn test_sequence_split_across_reads() {
        let mut decoder = InputDecoder::new();
        assert_eq!(decoder.decode(b"\x1b").count(), 0);
        assert_eq!(decoder.decode(b"[").count(), 0);
        let events: Vec<_> = decoder.decode(b"D").collect();
        assert_eq!(events, vec![InputEvent::Direction(Direction::Left)]);
    }

    #[test]
    fn test_coalesced_keys_all_decode() {
        assert_eq!(
            decode_all(b"\x1b[A\x1b[Cq"),
            vec![
                InputEvent::Direction(Direction::Up),
                InputEvent::Direction(Direction::Right),
                InputEvent::Quit,
            ]
        );
    }

    #[test]
    fn test_escape_then_quit() {
        assert_eq!(decode_all(b"\x1bq"), vec![InputEvent::Quit]);
        assert_eq!(decode_all(b"\x1b\x1b[B"), vec![InputEvent::Direction(Direction::Down)]);
    }
}
