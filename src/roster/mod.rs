//! Roster de jugadores: nombre visible de cada gema.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use log::debug;

use crate::error::RosterError;
use crate::types::{ParticipantId, Player};

#[derive(Debug, Default)]
struct RosterTable {
    players: BTreeMap<ParticipantId, String>,
    next_id: ParticipantId,
}

/// Registro en memoria de jugadores. Los ids se asignan en orden desde 0.
#[derive(Debug, Default)]
pub struct Roster {
    table: Mutex<RosterTable>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_table<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut RosterTable) -> R,
    {
        let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut table)
    }

    /// Registra un jugador nuevo y devuelve su id.
    ///
    /// ```rust
    /// use ruleta::roster::Roster;
    ///
    /// let roster = Roster::new();
    /// assert_eq!(roster.add("Rubí").id, 0);
    /// assert_eq!(roster.add("Zafiro").id, 1);
    /// ```
    pub fn add(&self, name: impl Into<String>) -> Player {
        let name = name.into();
        let id = self.with_table(|t| {
            let id = t.next_id;
            t.next_id += 1;
            t.players.insert(id, name.clone());
            id
        });
        debug!("add player id={id} name={name}");
        Player { id, name }
    }

    /// Todos los jugadores, ordenados por id.
    pub fn all(&self) -> Vec<Player> {
        self.with_table(|t| {
            t.players
                .iter()
                .map(|(&id, name)| Player {
                    id,
                    name: name.clone(),
                })
                .collect()
        })
    }

    /// Cambia el nombre de un jugador existente.
    pub fn update(&self, player: Player) -> Result<Player, RosterError> {
        self.with_table(|t| match t.players.get_mut(&player.id) {
            Some(name) => {
                name.clone_from(&player.name);
                Ok(())
            }
            None => Err(RosterError::PlayerDoesNotExist(player.id)),
        })?;
        debug!("update player {player}");
        Ok(player)
    }

    pub fn name_of(&self, id: ParticipantId) -> Option<String> {
        self.with_table(|t| t.players.get(&id).cloned())
    }

    pub fn ids(&self) -> Vec<ParticipantId> {
        self.with_table(|t| t.players.keys().copied().collect())
    }
}
