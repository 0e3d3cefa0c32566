use serde::{Deserialize, Serialize};

use maxrects::io::ext_repr::{ExtInstance, ExtSolution};

use crate::config::PackConfig;

/// Everything written to the JSON solution file
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PackOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: PackConfig,
}
