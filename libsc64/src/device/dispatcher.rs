// libsc64/src/device/dispatcher.rs

use log::{debug, trace};

use crate::protocol::{AsyncPacket, Classified, Command, Expectation, Frame, Response, classify};
use crate::transport::Transport;
use crate::utils::HexDump;
use crate::{Error, Result};

/// Send-then-receive for one command at a time.
///
/// The dispatcher owns the transport exclusively. It holds no queue or lock;
/// callers sharing a `Device` across threads must serialize whole exchanges.
pub struct Dispatcher {
    transport: Box<dyn Transport>,
    read_timeout_ms: u64,
    discarded_packets: usize,
}

impl Dispatcher {
    pub fn new(transport: Box<dyn Transport>, read_timeout_ms: u64) -> Self {
        Self {
            transport,
            read_timeout_ms,
            discarded_packets: 0,
        }
    }

    /// Encode and transmit `cmd`. No acknowledgment is awaited.
    pub fn send(&mut self, cmd: &Command) -> Result<()> {
        let frame = cmd.encode();
        trace!("-> {}", HexDump(&frame));
        self.transport.send(&frame)?;
        self.transport.flush()
    }

    /// Decode one frame and classify it against `expect`.
    pub fn receive(&mut self, expect: Expectation) -> Result<Classified> {
        let frame = Frame::read_from(&mut *self.transport, self.read_timeout_ms)?;
        let classified = classify(frame, expect);
        if let Classified::Discarded { id, len } = classified {
            self.discarded_packets += 1;
            debug!("discarded packet id={:#04x} ({} bytes) while awaiting response", id, len);
        }
        Ok(classified)
    }

    /// Block until a `CMP`/`ERR` frame arrives. Packets seen meanwhile are
    /// dropped.
    pub fn receive_response(&mut self) -> Result<Response> {
        loop {
            match self.receive(Expectation::Response)? {
                Classified::Response(response) => return Ok(response),
                Classified::Packet(_) | Classified::Discarded { .. } => continue,
            }
        }
    }

    /// Block until one frame arrives while awaiting a packet.
    pub fn receive_packet(&mut self) -> Result<AsyncPacket> {
        match self.receive(Expectation::Packet)? {
            Classified::Packet(packet) => Ok(packet),
            Classified::Response(response) => Err(Error::UnexpectedResponse { id: response.id }),
            Classified::Discarded { id, .. } => Err(Error::UnexpectedResponse { id }),
        }
    }

    /// Run one command and return the raw response payload.
    ///
    /// Fails with `Correlation` when the response id differs from the
    /// opcode, and with `Device` when the error flag is set unless
    /// `ignore_error` is true. Nothing is retried.
    pub fn execute(&mut self, cmd: &Command, ignore_error: bool) -> Result<Vec<u8>> {
        let response = self.execute_response(cmd)?;
        if response.error && !ignore_error {
            return Err(Error::Device {
                command: response.id,
            });
        }
        Ok(response.data)
    }

    /// Run one command and return the correlated response as is, error flag
    /// included.
    pub fn execute_response(&mut self, cmd: &Command) -> Result<Response> {
        let opcode = cmd.command_code();
        debug!("execute {:?}", cmd);
        self.send(cmd)?;

        let response = self.receive_response()?;
        if response.id != opcode {
            return Err(Error::Correlation {
                expected: opcode,
                actual: response.id,
            });
        }
        Ok(response)
    }

    /// Number of packets dropped while a response was awaited
    pub fn discarded_packets(&self) -> usize {
        self.discarded_packets
    }

    pub fn transport_mut(&mut self) -> &mut dyn Transport {
        &mut *self.transport
    }

    pub fn into_transport(self) -> Box<dyn Transport> {
        self.transport
    }
}
