//! Synchronous event bus between the host and the overlay.

use std::collections::HashMap;

use strum::{Display, EnumIter};
use tracing::trace;

use crate::host::Host;
use crate::key::Key;

/// Events the host raises.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostEvent {
    /// Raised once after the game has started.
    GameLaunched,
    /// The world layer of a frame was drawn.
    RenderedWorld,
    /// The HUD layer of a frame is being drawn.
    RenderedHud,
    ButtonPressed(Key),
}

impl HostEvent {
    pub const fn kind(&self) -> EventKind {
        match self {
            HostEvent::GameLaunched => EventKind::GameLaunched,
            HostEvent::RenderedWorld => EventKind::RenderedWorld,
            HostEvent::RenderedHud => EventKind::RenderedHud,
            HostEvent::ButtonPressed(_) => EventKind::ButtonPressed,
        }
    }
}

/// Subscription key for [`HostEvent`]s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum EventKind {
    GameLaunched,
    RenderedWorld,
    RenderedHud,
    ButtonPressed,
}

/// Typed handler invoked with the subscriber's state, the host and the event.
pub type Handler<S> = fn(&mut S, &mut dyn Host, &HostEvent);

struct Subscription<S> {
    name: &'static str,
    handler: Handler<S>,
}

/// Dispatches host events to handlers registered for their kind.
///
/// Handlers of the same kind run in registration order on the caller's
/// thread; nothing is queued.
pub struct EventBus<S> {
    subscriptions: HashMap<EventKind, Vec<Subscription<S>>>,
}

impl<S> Default for EventBus<S> {
    fn default() -> Self {
        Self {
            subscriptions: HashMap::new(),
        }
    }
}

impl<S> EventBus<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for events of `kind`.
    pub fn subscribe(&mut self, kind: EventKind, name: &'static str, handler: Handler<S>) {
        self.subscriptions
            .entry(kind)
            .or_default()
            .push(Subscription { name, handler });
    }

    /// Runs every handler subscribed to the event's kind and returns how many ran.
    pub fn dispatch(&self, subscriber: &mut S, host: &mut dyn Host, event: HostEvent) -> usize {
        let Some(subscriptions) = self.subscriptions.get(&event.kind()) else {
            return 0;
        };

        for subscription in subscriptions {
            trace!(
                target: "coords::event",
                handler = subscription.name,
                event = ?event,
                "Dispatching"
            );
            (subscription.handler)(subscriber, host, &event);
        }

        subscriptions.len()
    }

    /// Runs one frame: world render, HUD render, then each key press in order.
    pub fn run_frame(
        &self,
        subscriber: &mut S,
        host: &mut dyn Host,
        pressed: impl IntoIterator<Item = Key>,
    ) {
        self.dispatch(subscriber, host, HostEvent::RenderedWorld);
        self.dispatch(subscriber, host, HostEvent::RenderedHud);
        for key in pressed {
            self.dispatch(subscriber, host, HostEvent::ButtonPressed(key));
        }
    }

    /// Number of handlers registered for `kind`.
    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.subscriptions.get(&kind).map_or(0, Vec::len)
    }

    /// Handler names for `kind`, in dispatch order (for debugging).
    pub fn handler_names(&self, kind: EventKind) -> impl Iterator<Item = &'static str> + '_ {
        self.subscriptions
            .get(&kind)
            .into_iter()
            .flatten()
            .map(|s| s.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Vec2;
    use crate::host::TileSource;
    use crate::hud::{Renderer, SpriteBatch};

    #[derive(Default)]
    struct NullHost {
        batch: SpriteBatch,
    }

    impl TileSource for NullHost {
        fn player_tile(&self) -> Vec2 {
            Vec2::ZERO
        }

        fn cursor_tile(&self) -> Vec2 {
            Vec2::ZERO
        }
    }

    impl Host for NullHost {
        fn is_world_ready(&self) -> bool {
            true
        }

        fn location_name(&self) -> &str {
            "Farm"
        }

        fn viewport(&self) -> Vec2 {
            Vec2::ZERO
        }

        fn zoom_level(&self) -> f32 {
            1.0
        }

        fn show_global_message(&mut self, _message: &str) {}

        fn renderer(&mut self) -> &mut dyn Renderer {
            &mut self.batch
        }
    }

    fn record(log: &mut Vec<String>, _host: &mut dyn Host, event: &HostEvent) {
        log.push(format!("{event:?}"));
    }

    fn record_twice(log: &mut Vec<String>, _host: &mut dyn Host, event: &HostEvent) {
        log.push(format!("second {event:?}"));
    }

    #[test]
    fn dispatch_runs_only_matching_handlers_in_order() {
        let mut bus: EventBus<Vec<String>> = EventBus::new();
        bus.subscribe(EventKind::RenderedWorld, "record", record);
        bus.subscribe(EventKind::RenderedWorld, "record_twice", record_twice);
        bus.subscribe(EventKind::ButtonPressed, "record", record);

        let mut log = Vec::new();
        let mut host = NullHost::default();

        assert_eq!(bus.dispatch(&mut log, &mut host, HostEvent::RenderedWorld), 2);
        assert_eq!(bus.dispatch(&mut log, &mut host, HostEvent::GameLaunched), 0);

        assert_eq!(log, ["RenderedWorld", "second RenderedWorld"]);
        assert_eq!(
            bus.handler_names(EventKind::RenderedWorld).collect::<Vec<_>>(),
            ["record", "record_twice"]
        );
    }

    #[test]
    fn frame_order_is_world_hud_then_input() {
        let mut bus: EventBus<Vec<String>> = EventBus::new();
        bus.subscribe(EventKind::ButtonPressed, "record", record);
        bus.subscribe(EventKind::RenderedHud, "record", record);
        bus.subscribe(EventKind::RenderedWorld, "record", record);

        let mut log = Vec::new();
        let mut host = NullHost::default();
        bus.run_frame(&mut log, &mut host, [Key::F(8), Key::F(9)]);

        assert_eq!(
            log,
            [
                "RenderedWorld",
                "RenderedHud",
                "ButtonPressed(F(8))",
                "ButtonPressed(F(9))",
            ]
        );
        assert_eq!(bus.handler_count(EventKind::GameLaunched), 0);
    }
}
