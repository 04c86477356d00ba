use std::io;
use std::net::UdpSocket;

/// Connectionless best-effort sink for the emitted coordinate stream. One
/// datagram per tick; delivery is never retried.
#[derive(Debug)]
pub struct UdpSink {
    socket: UdpSocket,
}

impl UdpSink {
    pub fn connect(host: &str, port: u16) -> io::Result<Self> {
        let socket = UdpSocket::bind(("0.0.0.0", 0))?;
        socket.connect((host, port))?;
        Ok(Self { socket })
    }

    pub fn send(&self, x: i32, y: i32) -> io::Result<()> {
        self.socket.send(format_payload(x, y).as_bytes())?;
        Ok(())
    }
}

/// Wire payload: space-separated decimal integers, no trailing data.
pub fn format_payload(x: i32, y: i32) -> String {
    format!("{x} {y}")
}

#[cfg(test)]
mod tests {
    use super::{format_payload, UdpSink};
    use std::net::UdpSocket;
    use std::time::Duration;

    #[test]
    fn payload_is_two_space_separated_integers() {
        assert_eq!(format_payload(0, 0), "0 0");
        assert_eq!(format_payload(1600, 810), "1600 810");
        assert_eq!(format_payload(-5, 12), "-5 12");
    }

    #[test]
    fn sends_one_datagram_per_call() {
        let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
        receiver
            .set_read_timeout(Some(Duration::from_secs(2)))
            .unwrap();
        let port = receiver.local_addr().unwrap().port();

        let sink = UdpSink::connect("127.0.0.1", port).unwrap();
        sink.send(320, 270).unwrap();

        let mut buf = [0u8; 64];
        let (len, _) = receiver.recv_from(&mut buf).unwrap();
        assert_eq!(&buf[..len], b"320 270");
    }
}
