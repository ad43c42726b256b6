use crate::app::{HistogramApp, LoaderMessage};

impl HistogramApp {
    pub fn process_loader_messages(&mut self) {
        // A handful per frame keeps the UI responsive if results pile up
        let max_messages_per_frame = 10;

        for _ in 0..max_messages_per_frame {
            match self.loader_rx.try_recv() {
                Ok(msg) => self.handle_loader_message(msg),
                Err(_) => break,
            }
        }
    }

    pub fn handle_loader_message(&mut self, msg: LoaderMessage) {
        match msg {
            LoaderMessage::ImageLoaded { request, sample } if request == self.request_id => {
                self.on_image_loaded(sample)
            }
            LoaderMessage::LoadError { request, error } if request == self.request_id => {
                self.on_load_error(error)
            }
            LoaderMessage::ImageLoaded { request, .. } | LoaderMessage::LoadError { request, .. } => {
                log::debug!(
                    "Dropping result of request {} (current is {})",
                    request,
                    self.request_id
                );
            }
        }
    }
}
