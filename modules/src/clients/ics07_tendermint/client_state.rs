use core::time::Duration;

use ibc_genesis_proto::google::protobuf::{Any, Duration as RawDuration};
use ibc_genesis_proto::ibc::lightclients::tendermint::v1::ClientState as RawTmClientState;
use ibc_genesis_proto::Protobuf;
use serde_derive::{Deserialize, Serialize};

use crate::clients::ics07_tendermint::error::Error;
use crate::clients::ics07_tendermint::trust_threshold::TrustThreshold;
use crate::core::ics02_client::client_state::ClientState as Ics2ClientState;
use crate::core::ics02_client::client_type::ClientType;
use crate::core::ics02_client::error::Error as Ics02Error;
use crate::core::ics02_client::height::Height;

pub const TENDERMINT_CLIENT_STATE_TYPE_URL: &str = "/ibc.lightclients.tendermint.v1.ClientState";

/// Maximum length of a Tendermint chain identifier.
pub const MAX_CHAIN_ID_LEN: usize = 50;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientState {
    pub chain_id: String,
    pub trust_threshold: TrustThreshold,
    pub trusting_period: Duration,
    pub unbonding_period: Duration,
    pub max_clock_drift: Duration,
    pub latest_height: Height,
    pub upgrade_path: Vec<String>,
    pub allow_update: AllowUpdate,
    pub frozen_height: Option<Height>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowUpdate {
    pub after_expiry: bool,
    pub after_misbehaviour: bool,
}

impl ClientState {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        chain_id: String,
        trust_threshold: TrustThreshold,
        trusting_period: Duration,
        unbonding_period: Duration,
        max_clock_drift: Duration,
        latest_height: Height,
        upgrade_path: Vec<String>,
        allow_update: AllowUpdate,
    ) -> Self {
        Self {
            chain_id,
            trust_threshold,
            trusting_period,
            unbonding_period,
            max_clock_drift,
            latest_height,
            upgrade_path,
            allow_update,
            frozen_height: None,
        }
    }

    /// Stateless checks on the client parameters, in the order a chain
    /// applies them when the client is imported.
    pub fn validate_params(&self) -> Result<(), Error> {
        if self.chain_id.trim().is_empty() {
            return Err(Error::invalid_chain_id(
                self.chain_id.clone(),
                "chain id cannot be blank".to_string(),
            ));
        }

        if self.chain_id.len() > MAX_CHAIN_ID_LEN {
            return Err(Error::invalid_chain_id(
                self.chain_id.clone(),
                format!("chain id is longer than {MAX_CHAIN_ID_LEN} characters"),
            ));
        }

        self.trust_threshold.validate()?;

        if self.trusting_period.is_zero() {
            return Err(Error::invalid_trusting_period(
                "trusting period must be greater than zero".to_string(),
            ));
        }

        if self.unbonding_period.is_zero() {
            return Err(Error::invalid_unbonding_period(
                "unbonding period must be greater than zero".to_string(),
            ));
        }

        if self.max_clock_drift.is_zero() {
            return Err(Error::invalid_max_clock_drift());
        }

        let chain_id_revision = revision_number_of(&self.chain_id);
        if self.latest_height.revision_number != chain_id_revision {
            return Err(Error::mismatched_revision(
                self.latest_height.revision_number,
                self.chain_id.clone(),
                chain_id_revision,
            ));
        }

        if self.latest_height.revision_height == 0 {
            return Err(Error::invalid_latest_height(self.latest_height));
        }

        if self.trusting_period >= self.unbonding_period {
            return Err(Error::invalid_trusting_period(format!(
                "trusting period ({:?}) should be < unbonding period ({:?})",
                self.trusting_period, self.unbonding_period
            )));
        }

        if let Some(index) = self.upgrade_path.iter().position(|k| k.trim().is_empty()) {
            return Err(Error::invalid_upgrade_path(index));
        }

        Ok(())
    }
}

/// Revision number encoded in an epoch-formatted chain identifier such as
/// `cosmoshub-4`, or `0` if the identifier is not in that format.
pub fn revision_number_of(chain_id: &str) -> u64 {
    match chain_id.rsplit_once('-') {
        Some((name, revision))
            if !name.is_empty()
                && !name.ends_with(['-', '\n'])
                && !revision.starts_with('0')
                && !revision.is_empty()
                && revision.bytes().all(|b| b.is_ascii_digit()) =>
        {
            revision.parse().unwrap_or(0)
        }
        _ => 0,
    }
}

impl Ics2ClientState for ClientState {
    fn client_type(&self) -> ClientType {
        ClientType::Tendermint
    }

    fn latest_height(&self) -> Height {
        self.latest_height
    }

    fn validate(&self) -> Result<(), Ics02Error> {
        self.validate_params().map_err(Into::into)
    }
}

/// Negative durations decode as zero, which `validate_params` rejects.
pub(crate) fn duration_from_raw(raw: Option<RawDuration>) -> Duration {
    let raw = raw.unwrap_or_default();

    match (u64::try_from(raw.seconds), u32::try_from(raw.nanos)) {
        (Ok(seconds), Ok(nanos)) => {
            Duration::from_secs(seconds).saturating_add(Duration::from_nanos(nanos.into()))
        }
        _ => Duration::ZERO,
    }
}

pub(crate) fn duration_to_raw(duration: Duration) -> RawDuration {
    RawDuration {
        seconds: i64::try_from(duration.as_secs()).unwrap_or(i64::MAX),
        nanos: i32::try_from(duration.subsec_nanos()).unwrap_or(i32::MAX),
    }
}

impl Protobuf<RawTmClientState> for ClientState {}

impl TryFrom<RawTmClientState> for ClientState {
    type Error = Error;

    fn try_from(raw: RawTmClientState) -> Result<Self, Self::Error> {
        let trust_threshold = raw.trust_level.unwrap_or_default().into();

        Ok(Self {
            chain_id: raw.chain_id,
            trust_threshold,
            trusting_period: duration_from_raw(raw.trusting_period),
            unbonding_period: duration_from_raw(raw.unbonding_period),
            max_clock_drift: duration_from_raw(raw.max_clock_drift),
            latest_height: raw.latest_height.unwrap_or_default().into(),
            upgrade_path: raw.upgrade_path,
            allow_update: AllowUpdate {
                after_expiry: raw.allow_update_after_expiry,
                after_misbehaviour: raw.allow_update_after_misbehaviour,
            },
            frozen_height: raw
                .frozen_height
                .map(Height::from)
                .filter(|height| !height.is_zero()),
        })
    }
}

impl From<ClientState> for RawTmClientState {
    fn from(value: ClientState) -> Self {
        Self {
            chain_id: value.chain_id,
            trust_level: Some(value.trust_threshold.into()),
            trusting_period: Some(duration_to_raw(value.trusting_period)),
            unbonding_period: Some(duration_to_raw(value.unbonding_period)),
            max_clock_drift: Some(duration_to_raw(value.max_clock_drift)),
            frozen_height: Some(value.frozen_height.unwrap_or_default().into()),
            latest_height: Some(value.latest_height.into()),
            upgrade_path: value.upgrade_path,
            allow_update_after_expiry: value.allow_update.after_expiry,
            allow_update_after_misbehaviour: value.allow_update.after_misbehaviour,
        }
    }
}

impl From<ClientState> for Any {
    fn from(client_state: ClientState) -> Self {
        Any {
            type_url: TENDERMINT_CLIENT_STATE_TYPE_URL.to_string(),
            value: Protobuf::<RawTmClientState>::encode_vec(&client_state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ics07_tendermint::error::ErrorDetail;
    use crate::test_utils::dummy_tm_client_state;
    use test_log::test;

    #[test]
    fn client_state_new() {
        struct Test {
            name: String,
            params: ClientState,
            want_pass: bool,
        }

        let default_params = dummy_tm_client_state();

        let tests: Vec<Test> = vec![
            Test {
                name: "Valid parameters".to_string(),
                params: default_params.clone(),
                want_pass: true,
            },
            Test {
                name: "Blank chain id".to_string(),
                params: ClientState {
                    chain_id: "  ".to_string(),
                    ..default_params.clone()
                },
                want_pass: false,
            },
            Test {
                name: "Chain id longer than allowed".to_string(),
                params: ClientState {
                    chain_id: format!("{}-1", "c".repeat(MAX_CHAIN_ID_LEN)),
                    ..default_params.clone()
                },
                want_pass: false,
            },
            Test {
                name: "Trust level below 1/3".to_string(),
                params: ClientState {
                    trust_threshold: TrustThreshold::new(1, 4),
                    ..default_params.clone()
                },
                want_pass: false,
            },
            Test {
                name: "Invalid (zero) trusting period".to_string(),
                params: ClientState {
                    trusting_period: Duration::ZERO,
                    ..default_params.clone()
                },
                want_pass: false,
            },
            Test {
                name: "Invalid (zero) unbonding period".to_string(),
                params: ClientState {
                    unbonding_period: Duration::ZERO,
                    ..default_params.clone()
                },
                want_pass: false,
            },
            Test {
                name: "Invalid (zero) max clock drift".to_string(),
                params: ClientState {
                    max_clock_drift: Duration::ZERO,
                    ..default_params.clone()
                },
                want_pass: false,
            },
            Test {
                name: "Invalid (too large) trusting period w.r.t. unbonding period".to_string(),
                params: ClientState {
                    trusting_period: default_params.unbonding_period + Duration::from_secs(1),
                    ..default_params.clone()
                },
                want_pass: false,
            },
            Test {
                name: "Latest height revision does not match chain id".to_string(),
                params: ClientState {
                    latest_height: Height::new(2, 10),
                    ..default_params.clone()
                },
                want_pass: false,
            },
            Test {
                name: "Zero latest height".to_string(),
                params: ClientState {
                    latest_height: Height::new(1, 0),
                    ..default_params.clone()
                },
                want_pass: false,
            },
            Test {
                name: "Blank upgrade path key".to_string(),
                params: ClientState {
                    upgrade_path: vec!["upgrade".to_string(), "".to_string()],
                    ..default_params.clone()
                },
                want_pass: false,
            },
        ];

        for test in tests {
            let res = test.params.validate_params();

            assert_eq!(
                test.want_pass,
                res.is_ok(),
                "ClientState::validate() failed for test {}, \nmsg{:?} with error {:?}",
                test.name,
                test.params.clone(),
                res.err(),
            );
        }
    }

    #[test]
    fn mismatched_revision_reports_both_sides() {
        let state = ClientState {
            latest_height: Height::new(3, 10),
            ..dummy_tm_client_state()
        };

        let err = state.validate_params().unwrap_err();
        match err.detail() {
            ErrorDetail::MismatchedRevision(e) => {
                assert_eq!(e.height_revision, 3);
                assert_eq!(e.chain_id_revision, 1);
            }
            _ => panic!("unexpected error: {err}"),
        }
    }

    #[test]
    fn chain_id_revision_numbers() {
        assert_eq!(revision_number_of("testchain-1"), 1);
        assert_eq!(revision_number_of("cosmoshub-4"), 4);
        assert_eq!(revision_number_of("evmos_9001-2"), 2);
        assert_eq!(revision_number_of("testchain"), 0);
        assert_eq!(revision_number_of("testchain-01"), 0);
        assert_eq!(revision_number_of("testchain--1"), 0);
        assert_eq!(revision_number_of("-1"), 0);
    }

    #[test]
    fn decoding_is_lenient_and_validation_is_not() {
        let raw = RawTmClientState {
            chain_id: "testchain-1".to_string(),
            ..Default::default()
        };

        let state = ClientState::try_from(raw).unwrap();
        assert!(state.trusting_period.is_zero());
        assert!(state.validate_params().is_err());
    }

    #[test]
    fn negative_durations_fail_validation_not_decoding() {
        for (trusting_seconds, trusting_nanos) in [(-1, 0), (10, -5)] {
            let raw = RawTmClientState {
                trusting_period: Some(RawDuration {
                    seconds: trusting_seconds,
                    nanos: trusting_nanos,
                }),
                ..RawTmClientState::from(dummy_tm_client_state())
            };

            let state = ClientState::try_from(raw).unwrap();
            assert!(state.trusting_period.is_zero());

            let err = state.validate_params().unwrap_err();
            assert!(matches!(err.detail(), ErrorDetail::InvalidTrustingPeriod(_)));
        }
    }
}
