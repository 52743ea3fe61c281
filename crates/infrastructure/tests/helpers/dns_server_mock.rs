#![allow(dead_code)]
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// What the mock server answers to every query.
#[derive(Debug, Clone)]
pub enum MockAnswer {
    /// NOERROR with one TXT record per entry; each entry is the record's
    /// character-strings.
    Txt(Vec<Vec<String>>),
    /// NOERROR with an empty answer section.
    NoData,
    NxDomain,
    ServFail,
    /// Never replies.
    Silent,
    /// UDP answer has TC set and carries `udp`; TCP answers with `tcp`.
    Truncated {
        udp: Vec<Vec<String>>,
        tcp: Vec<Vec<String>>,
    },
}

impl MockAnswer {
    pub fn txt(records: &[&str]) -> Self {
        Self::Txt(records.iter().map(|r| vec![r.to_string()]).collect())
    }
}

/// Loopback DNS server speaking just enough wire format for TXT tests.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Start on an ephemeral port. TCP listens on the same port as UDP.
    pub async fn start(answer: MockAnswer) -> std::io::Result<Self> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let listener = TcpListener::bind(addr).await?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = udp_response(&answer, &buf[..len]) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                    result = listener.accept() => {
                        if let Ok((stream, _)) = result {
                            tokio::spawn(serve_tcp(stream, answer.clone()));
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn serve_tcp(mut stream: tokio::net::TcpStream, answer: MockAnswer) {
    let mut len_buf = [0u8; 2];
    if stream.read_exact(&mut len_buf).await.is_err() {
        return;
    }
    let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
    if stream.read_exact(&mut query).await.is_err() {
        return;
    }

    let response = match &answer {
        MockAnswer::Truncated { tcp, .. } => build_response(&query, 0, false, tcp),
        MockAnswer::Silent => return,
        other => match udp_response(other, &query) {
            Some(response) => response,
            None => return,
        },
    };

    let mut framed = (response.len() as u16).to_be_bytes().to_vec();
    framed.extend_from_slice(&response);
    let _ = stream.write_all(&framed).await;
}

fn udp_response(answer: &MockAnswer, query: &[u8]) -> Option<Vec<u8>> {
    if query.len() < 12 {
        return None;
    }
    match answer {
        MockAnswer::Txt(records) => Some(build_response(query, 0, false, records)),
        MockAnswer::NoData => Some(build_response(query, 0, false, &[])),
        MockAnswer::NxDomain => Some(build_response(query, 3, false, &[])),
        MockAnswer::ServFail => Some(build_response(query, 2, false, &[])),
        MockAnswer::Silent => None,
        MockAnswer::Truncated { udp, .. } => Some(build_response(query, 0, true, udp)),
    }
}

/// Echo the question and append one TXT answer per record, each pointing
/// back at the question name.
fn build_response(query: &[u8], rcode: u8, truncated: bool, records: &[Vec<String>]) -> Vec<u8> {
    let mut response = Vec::with_capacity(512);

    response.extend_from_slice(&query[0..2]);
    // QR=1, RD=1, TC as requested
    response.push(if truncated { 0x83 } else { 0x81 });
    // RA=1, RCODE
    response.push(0x80 | (rcode & 0x0f));
    response.extend_from_slice(&query[4..6]);
    response.extend_from_slice(&(records.len() as u16).to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00]);
    response.extend_from_slice(&[0x00, 0x00]);

    // Queries carry no additional section, so the rest is the question.
    response.extend_from_slice(&query[12..]);

    for chunks in records {
        let rdata: Vec<u8> = chunks
            .iter()
            .flat_map(|chunk| {
                let mut bytes = vec![chunk.len() as u8];
                bytes.extend_from_slice(chunk.as_bytes());
                bytes
            })
            .collect();

        response.extend_from_slice(&[
            0xc0, 0x0c, // Name pointer to question
            0x00, 0x10, // Type TXT
            0x00, 0x01, // Class IN
            0x00, 0x00, 0x00, 0x3c, // TTL: 60 seconds
        ]);
        response.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        response.extend_from_slice(&rdata);
    }

    response
}
