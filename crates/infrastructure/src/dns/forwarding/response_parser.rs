use dnslink_router_domain::DomainError;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::rdata::TXT;
use hickory_proto::rr::RData;
use tracing::debug;

/// Decoded answer to a TXT query.
#[derive(Debug, Clone)]
pub struct TxtResponse {
    pub id: u16,
    pub rcode: ResponseCode,
    pub truncated: bool,
    /// One string per TXT record, its character-strings concatenated.
    pub records: Vec<String>,
}

impl TxtResponse {
    /// Classify the answer: records, "nothing published", or a failure.
    pub fn into_records(self, name: &str, server: &str) -> Result<Vec<String>, DomainError> {
        match self.rcode {
            ResponseCode::NXDomain => Err(DomainError::DnsLinkNotFound(name.to_string())),
            ResponseCode::NoError if self.records.is_empty() => {
                Err(DomainError::DnsLinkNotFound(name.to_string()))
            }
            ResponseCode::NoError => Ok(self.records),
            rcode => Err(DomainError::LookupFailed(format!(
                "{} answered {} for {}",
                server,
                TxtResponseParser::rcode_to_status(rcode),
                name
            ))),
        }
    }
}

pub struct TxtResponseParser;

impl TxtResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<TxtResponse, DomainError> {
        if response_bytes.len() < 12 {
            return Err(DomainError::InvalidDnsResponse(format!(
                "response too short: {} bytes",
                response_bytes.len()
            )));
        }
        let id = u16::from_be_bytes([response_bytes[0], response_bytes[1]]);

        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.response_code();
        let truncated = message.truncated();

        let records: Vec<String> = message
            .answers()
            .iter()
            .filter_map(|record| match record.data() {
                RData::TXT(txt) => Some(join_character_strings(txt)),
                _ => None,
            })
            .collect();

        debug!(
            rcode = Self::rcode_to_status(rcode),
            txt_records = records.len(),
            truncated = truncated,
            "TXT response parsed"
        );

        Ok(TxtResponse {
            id,
            rcode,
            truncated,
            records,
        })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}

/// A TXT record longer than 255 bytes arrives as several character-strings;
/// they form one logical value.
fn join_character_strings(txt: &TXT) -> String {
    txt.txt_data()
        .iter()
        .map(|chunk| String::from_utf8_lossy(chunk))
        .collect()
}
