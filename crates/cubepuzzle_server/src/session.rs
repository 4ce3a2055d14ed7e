//! Per-user cube storage.

use std::collections::HashMap;
use std::sync::Arc;

use cubepuzzle::{Cube, CubeError};
use parking_lot::{Mutex, RwLock};

use crate::ServerConfig;

/// Identifier sent by a client to select its cube.
pub type UserId = String;

/// Shared handle to one user's cube.
pub type CubeHandle = Arc<Mutex<Cube>>;

/// Keyed store of one cube per user.
///
/// The map lock is only held while looking up or inserting an entry. Each
/// cube has its own lock, so requests for the same user serialize while
/// different users never contend.
#[derive(Debug, Clone)]
pub struct SessionStore {
    template: Arc<Cube>,
    cubes: Arc<RwLock<HashMap<UserId, CubeHandle>>>,
}

impl SessionStore {
    /// Constructs a store that hands out copies of `template` to new users.
    pub fn new(template: Cube) -> Self {
        Self {
            template: Arc::new(template),
            cubes: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Constructs a store whose cubes have the configured size and initial
    /// moves.
    pub fn from_config(config: &ServerConfig) -> Result<Self, CubeError> {
        let mut template = Cube::new(config.cube_size)?;
        let n = template.apply_sequence(&config.initial_moves)?;
        log::info!(
            "new users get a {0}x{0}x{0} cube with {n} initial moves",
            config.cube_size,
        );
        Ok(Self::new(template))
    }

    /// Returns the cube that new users start with.
    pub fn template(&self) -> &Cube {
        &self.template
    }

    /// Returns the cube for `user`, creating it if it does not exist.
    pub fn cube(&self, user: &str) -> CubeHandle {
        if let Some(cube) = self.cubes.read().get(user) {
            return Arc::clone(cube);
        }
        let mut cubes = self.cubes.write();
        let cube = cubes.entry(user.to_owned()).or_insert_with(|| {
            log::debug!("creating cube for user {user:?}");
            Arc::new(Mutex::new((*self.template).clone()))
        });
        Arc::clone(cube)
    }

    /// Removes the cube for `user`, returning whether one existed.
    pub fn remove(&self, user: &str) -> bool {
        self.cubes.write().remove(user).is_some()
    }

    /// Returns the number of users with a cube.
    pub fn len(&self) -> usize {
        self.cubes.read().len()
    }
    /// Returns whether no user has a cube yet.
    pub fn is_empty(&self) -> bool {
        self.cubes.read().is_empty()
    }
}
