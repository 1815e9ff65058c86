use std::sync::Arc;

use crate::domain::nutrition::ports::GenerationClient;

#[derive(Clone)]
pub struct Service<G>
where
    G: GenerationClient,
{
    pub(crate) generation_client: Arc<G>,
}

impl<G> Service<G>
where
    G: GenerationClient,
{
    pub fn new(generation_client: G) -> Self {
        Self {
            generation_client: Arc::new(generation_client),
        }
    }
}
