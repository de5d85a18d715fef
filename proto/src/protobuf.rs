//! Conversion between domain types and their protobuf representation.

use core::convert::TryFrom;
use core::fmt::Display;

use bytes::{Buf, BufMut};
use flex_error::{define_error, TraceError};
use prost::{DecodeError, EncodeError, Message};

define_error! {
    Error {
        TryFromProtobuf
            { reason: String }
            | e | { format_args!("error converting message type into domain type: {}", e.reason) },

        EncodeMessage
            [ TraceError<EncodeError> ]
            | _ | { "error encoding message into buffer" },

        DecodeMessage
            [ TraceError<DecodeError> ]
            | _ | { "error decoding buffer into message" },
    }
}

impl Error {
    pub fn try_from<Raw, T, E>(e: E) -> Error
    where
        E: Display,
        T: TryFrom<Raw, Error = E>,
    {
        Error::try_from_protobuf(e.to_string())
    }
}

/// Object safe equivalent of `tendermint_proto::Protobuf`.
///
/// A domain type `T` implements `Protobuf<Raw>` once it can be converted into
/// `Raw` infallibly and parsed back from it with validation.
pub trait Protobuf<Raw: Message + From<Self> + Default>
where
    Self: Sized + Clone + TryFrom<Raw>,
    <Self as TryFrom<Raw>>::Error: Display,
{
    /// Encode into a buffer in Protobuf format.
    ///
    /// Fails if the buffer has insufficient capacity.
    fn encode<B: BufMut>(&self, buf: &mut B) -> Result<(), Error> {
        Raw::from(self.clone())
            .encode(buf)
            .map_err(Error::encode_message)
    }

    /// Encode with a length-delimiter to a buffer in Protobuf format.
    fn encode_length_delimited<B: BufMut>(&self, buf: &mut B) -> Result<(), Error> {
        Raw::from(self.clone())
            .encode_length_delimited(buf)
            .map_err(Error::encode_message)
    }

    /// Decode an instance from a buffer, then run the domain validation of
    /// `TryFrom<Raw>`.
    fn decode<B: Buf>(buf: B) -> Result<Self, Error> {
        let raw = Raw::decode(buf).map_err(Error::decode_message)?;

        Self::try_from(raw).map_err(Error::try_from::<Raw, Self, _>)
    }

    /// Decode a length-delimited instance from a buffer.
    fn decode_length_delimited<B: Buf>(buf: B) -> Result<Self, Error> {
        let raw = Raw::decode_length_delimited(buf).map_err(Error::decode_message)?;

        Self::try_from(raw).map_err(Error::try_from::<Raw, Self, _>)
    }

    /// Return the encoded length of the value without the delimiter.
    fn encoded_len(&self) -> usize {
        Raw::from(self.clone()).encoded_len()
    }

    /// Encode into a freshly allocated `Vec<u8>`.
    fn encode_vec(&self) -> Vec<u8> {
        Raw::from(self.clone()).encode_to_vec()
    }

    /// Decode from a byte slice.
    fn decode_vec(v: &[u8]) -> Result<Self, Error> {
        Self::decode(v)
    }

    /// Encode with a length-delimiter into a freshly allocated `Vec<u8>`.
    fn encode_length_delimited_vec(&self) -> Result<Vec<u8>, Error> {
        let len = self.encoded_len();
        let mut wire = Vec::with_capacity(len + prost::length_delimiter_len(len));
        self.encode_length_delimited(&mut wire).map(|_| wire)
    }

    /// Decode a length-delimited instance from a byte slice.
    fn decode_length_delimited_vec(v: &[u8]) -> Result<Self, Error> {
        Self::decode_length_delimited(v)
    }
}
