use std::fmt::Debug;

use futures::stream::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// A reactive state cell that can be watched for changes.
///
/// Every externally observable slot of the player state machine is a
/// `Property`. Watchers receive the current value immediately on
/// subscription, then a value per change.
#[derive(Clone)]
pub struct Property<T: Clone + Send + Sync + 'static> {
    tx: watch::Sender<T>,
    rx: watch::Receiver<T>,
}

impl<T: Clone + Send + Sync + 'static> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(initial: T) -> Self {
        let (tx, rx) = watch::channel(initial);
        Self { tx, rx }
    }

    /// Set a new value and notify all watchers.
    ///
    /// Watchers are only woken when the value actually changed.
    /// Only accessible within the crate; embedders observe, they do not
    /// mutate.
    pub(crate) fn set(&self, new_value: T)
    where
        T: PartialEq,
    {
        let _ = self.tx.send_if_modified(|current| {
            if *current != new_value {
                *current = new_value;
                true
            } else {
                false
            }
        });
    }

    /// Get the current value.
    ///
    /// Synchronous; clones the current value.
    pub fn get(&self) -> T {
        self.rx.borrow().clone()
    }

    /// Watch for changes to this property.
    ///
    /// The stream yields the current value immediately, then yields on
    /// every subsequent change.
    pub fn watch(&self) -> impl Stream<Item = T> + Send {
        WatchStream::new(self.rx.clone())
    }
}

impl<T: Clone + Send + Sync + Debug + 'static> Debug for Property<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Property").field("value", &self.get()).finish()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use futures::StreamExt;

    use super::*;

    #[tokio::test]
    async fn watch_yields_current_value_first() {
        let prop = Property::new(5u32);
        let mut stream = prop.watch();
        assert_eq!(stream.next().await, Some(5));
    }

    #[tokio::test]
    async fn set_skips_unchanged_values() {
        let prop = Property::new(1u32);
        let mut stream = prop.watch();
        assert_eq!(stream.next().await, Some(1));

        prop.set(1);
        prop.set(2);
        assert_eq!(stream.next().await, Some(2));
    }
}
