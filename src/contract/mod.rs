//! The request/result contract between a transport layer and a session.
//!
//! The engine performs no I/O. A transport (WebSocket server,
//! peer-to-peer mesh, in-process test harness) decodes a participant
//! action, calls [`handle_action`] with the sender's id, and sends out
//! the returned `(Recipient, ServerMessage)` pairs in order. Nothing
//! here is tied to a wire format; everything serializes via serde.
//!
//! Precondition violations (rolling twice, picking twice, starting an
//! empty lobby, ...) produce no messages at all. The one exception is
//! joining a started game, which answers the offender with
//! [`ServerMessage::JoinDenied`].

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::dice::DieKind;
use crate::modifier::Modifier;
use crate::scoring::RollResult;
use crate::session::{GameSession, GameSnapshot, RoundOutcome};

/// An inbound participant action, as forwarded by the transport.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ClientAction {
    /// Register with a display name.
    Join { name: String },
    /// Start the game for everyone in the lobby.
    Start,
    /// Choose this round's reward die.
    Pick { kind: DieKind },
    /// Roll all held dice for the current round.
    Roll,
    /// Return the session to the lobby.
    Reset,
    /// The participant's connection went away.
    Disconnect,
}

/// Who an outbound message goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recipient {
    /// Every connected participant.
    All,
    /// One participant.
    Player(PlayerId),
}

/// An outbound message for the transport to deliver.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerMessage {
    /// Refreshed observable state.
    Snapshot { state: GameSnapshot },
    /// The game already started; the join was rejected.
    JoinDenied,
    /// The game just started.
    GameStarted,
    /// The modifier for the round now starting (`None` clears it).
    ModifierChanged { modifier: Option<Modifier> },
    /// The sender's own roll outcome.
    RollResult { result: RollResult },
    /// The reward menu this player may pick from.
    Offer { choices: Vec<DieKind> },
    /// A round finished and the next one begins.
    RoundEnded { finished_round: u32 },
    /// The final round finished.
    GameEnded {
        winners: Vec<PlayerId>,
        winner_names: Vec<String>,
        totals: Vec<(PlayerId, i32)>,
    },
    /// The session returned to the lobby.
    ResetDone,
}

fn snapshot_of(session: &GameSession) -> ServerMessage {
    ServerMessage::Snapshot {
        state: session.snapshot(),
    }
}

/// Apply one participant action and collect the messages to send.
///
/// Messages must be delivered in the returned order; a round-end
/// snapshot, for instance, only makes sense after the offers that
/// precede it.
pub fn handle_action(
    session: &mut GameSession,
    sender: PlayerId,
    action: ClientAction,
) -> Vec<(Recipient, ServerMessage)> {
    let mut out = Vec::new();

    match action {
        ClientAction::Join { name } => {
            if session.register_player(sender, name) {
                out.push((Recipient::All, snapshot_of(session)));
            } else {
                out.push((Recipient::Player(sender), ServerMessage::JoinDenied));
            }
        }

        ClientAction::Start => {
            if session.start_game() {
                out.push((Recipient::All, snapshot_of(session)));
                out.push((
                    Recipient::All,
                    ServerMessage::ModifierChanged { modifier: None },
                ));
                out.push((Recipient::All, ServerMessage::GameStarted));
            }
        }

        ClientAction::Pick { kind } => {
            if session.pick_die(sender, kind) {
                out.push((Recipient::All, snapshot_of(session)));
            }
        }

        ClientAction::Roll => {
            let Some(result) = session.roll_dice(sender) else {
                return out;
            };
            out.push((
                Recipient::Player(sender),
                ServerMessage::RollResult { result },
            ));

            match session.check_round_complete() {
                None => {}
                Some(RoundOutcome::RoundEnd {
                    finished_round,
                    offers,
                    modifier,
                }) => {
                    out.push((
                        Recipient::All,
                        ServerMessage::RoundEnded { finished_round },
                    ));
                    let mut menus: Vec<_> = offers.into_iter().collect();
                    menus.sort_unstable_by_key(|&(id, _)| id);
                    for (id, menu) in menus {
                        out.push((
                            Recipient::Player(id),
                            ServerMessage::Offer {
                                choices: menu.into_vec(),
                            },
                        ));
                    }
                    out.push((Recipient::All, ServerMessage::ModifierChanged { modifier }));
                    out.push((Recipient::All, snapshot_of(session)));
                }
                Some(RoundOutcome::GameEnd { winners, totals }) => {
                    let winner_names = winners
                        .iter()
                        .filter_map(|&id| session.player(id))
                        .map(|player| player.name.clone())
                        .collect();
                    out.push((
                        Recipient::All,
                        ServerMessage::GameEnded {
                            winners,
                            winner_names,
                            totals,
                        },
                    ));
                    out.push((Recipient::All, snapshot_of(session)));
                }
            }
        }

        ClientAction::Reset => {
            session.reset_game();
            out.push((Recipient::All, ServerMessage::ResetDone));
            out.push((Recipient::All, snapshot_of(session)));
        }

        ClientAction::Disconnect => {
            session.remove_player(sender);
            out.push((Recipient::All, snapshot_of(session)));
        }
    }

    out
}
