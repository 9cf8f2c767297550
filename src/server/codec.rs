//! `tokio_util::codec` glue: decodes incoming bytes into [`Command`]s and
//! encodes outgoing [`Reply`]s, the same split `libunftp`'s `FtpCodec` uses.

use bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder};

use super::command::Command;
use super::error::ControlChanError;
use super::line_parser;
use super::reply::Reply;

pub struct FtpCodec {
    next_index: usize,
}

impl FtpCodec {
    pub fn new() -> Self {
        FtpCodec { next_index: 0 }
    }
}

impl Default for FtpCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for FtpCodec {
    type Item = Command;
    type Error = ControlChanError;

    fn decode(&mut self, buf: &mut BytesMut) -> Result<Option<Command>, Self::Error> {
        let Some(newline_offset) = buf[self.next_index..].iter().position(|b| *b == b'\n') else {
            self.next_index = buf.len();
            return Ok(None);
        };
        let newline_index = newline_offset + self.next_index;
        let line = buf.split_to(newline_index + 1);
        self.next_index = 0;

        let text = std::str::from_utf8(&line).map_err(line_parser::ParseError::from)?;
        Ok(Some(line_parser::parse(text)?))
    }
}

impl Encoder<Reply> for FtpCodec {
    type Error = ControlChanError;

    fn encode(&mut self, reply: Reply, buf: &mut BytesMut) -> Result<(), Self::Error> {
        buf.extend_from_slice(reply.render().as_bytes());
        Ok(())
    }
}
