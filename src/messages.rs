use crate::error::CatalogError;
use crate::recipe::Recipe;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};

/// Results sent from background load/import tasks to the UI thread.
#[derive(Debug)]
pub enum CatalogMessage {
    /// The startup load finished.
    Loaded(Result<Vec<Recipe>, CatalogError>),

    /// A user-requested import finished.
    Imported {
        path: PathBuf,
        result: Result<Vec<Recipe>, CatalogError>,
    },
}

/// Channel pair connecting loader tasks to the event loop.
pub struct CatalogChannels {
    pub tx: Sender<CatalogMessage>,
    pub rx: Receiver<CatalogMessage>,
}

impl CatalogChannels {
    pub fn new() -> Self {
        let (tx, rx) = std::sync::mpsc::channel();
        Self { tx, rx }
    }
}

impl Default for CatalogChannels {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_arrive_in_send_order() {
        let channels = CatalogChannels::new();
        channels.tx.send(CatalogMessage::Loaded(Ok(Vec::new()))).unwrap();
        channels
            .tx
            .send(CatalogMessage::Imported {
                path: PathBuf::from("a.json"),
                result: Err(CatalogError::NotArray),
            })
            .unwrap();

        assert!(matches!(channels.rx.recv(), Ok(CatalogMessage::Loaded(Ok(_)))));
        assert!(matches!(
            channels.rx.recv(),
            Ok(CatalogMessage::Imported { .. })
        ));
    }
}
