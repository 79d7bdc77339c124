//! The slideshow widget: active slide, autoplay timer, lifecycle and
//! pointer policy, with change notification for whatever draws it.
//!
//! The host drives everything explicitly. It calls [`Carousel::mount`] when
//! the widget becomes visible, [`Carousel::unmount`] when it goes away,
//! forwards pointer and control input, and feeds frame time through
//! [`Carousel::update`]. Manual navigation never touches the autoplay
//! schedule.

use std::time::Duration;

use log::{debug, trace};

use crate::error::{CarouselError, Result};
use crate::slide::Slide;
use crate::state::{Cause, CarouselState};
use crate::timer::Autoplay;

/// Notification sent to listeners after every state mutation.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CarouselEvent {
    SlideChanged { from: usize, to: usize, cause: Cause },
    AutoplayStarted,
    AutoplayStopped,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&CarouselEvent)>;

pub struct Carousel {
    slides: Vec<Slide>,
    state: CarouselState,
    autoplay: Autoplay,
    mounted: bool,
    pointer_inside: bool,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

impl Carousel {
    /// Builds an unmounted carousel showing the first slide.
    pub fn new(slides: Vec<Slide>, interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(CarouselError::ZeroInterval);
        }
        let state = CarouselState::new(slides.len())?;
        Ok(Self {
            slides,
            state,
            autoplay: Autoplay::new(interval),
            mounted: false,
            pointer_inside: false,
            listeners: Vec::new(),
            next_listener_id: 0,
        })
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Always false: construction rejects an empty slide list.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn active_slide(&self) -> &Slide {
        &self.slides[self.state.current_index()]
    }

    /// Only the active slide is visible and accepts interaction.
    pub fn is_active(&self, index: usize) -> bool {
        index == self.state.current_index()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_active()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&CarouselEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn advance(&mut self) {
        self.navigate(Cause::Next);
    }

    pub fn retreat(&mut self) {
        self.navigate(Cause::Previous);
    }

    pub fn select_slide(&mut self, index: usize) -> Result<()> {
        let from = self.state.current_index();
        self.state.select(index)?;
        self.notify(CarouselEvent::SlideChanged { from, to: index, cause: Cause::Select });
        Ok(())
    }

    pub fn start_autoplay(&mut self) {
        if self.autoplay.start() {
            trace!("autoplay started");
            self.notify(CarouselEvent::AutoplayStarted);
        }
    }

    pub fn stop_autoplay(&mut self) {
        if self.autoplay.stop() {
            trace!("autoplay stopped");
            self.notify(CarouselEvent::AutoplayStopped);
        }
    }

    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        debug!("carousel mounted with {} slides", self.len());
        self.mounted = true;
        // A pointer already over the widget keeps it paused until it leaves
        if !self.pointer_inside {
            self.start_autoplay();
        }
    }

    pub fn unmount(&mut self) {
        if self.mounted {
            debug!("carousel unmounted");
        }
        self.mounted = false;
        self.pointer_inside = false;
        self.stop_autoplay();
    }

    pub fn pointer_enter(&mut self) {
        self.pointer_inside = true;
        self.stop_autoplay();
    }

    pub fn pointer_leave(&mut self) {
        self.pointer_inside = false;
        if self.mounted {
            self.start_autoplay();
        }
    }

    /// Forwards polled pointer state, firing enter/leave only on transitions.
    pub fn set_pointer_inside(&mut self, inside: bool) {
        match (self.pointer_inside, inside) {
            (false, true) => self.pointer_enter(),
            (true, false) => self.pointer_leave(),
            _ => {}
        }
    }

    /// Feeds elapsed frame time to the autoplay timer.
    pub fn update(&mut self, dt: Duration) {
        for _ in 0..self.autoplay.tick(dt) {
            self.navigate(Cause::Autoplay);
        }
    }

    fn navigate(&mut self, cause: Cause) {
        let from = self.state.current_index();
        match cause {
            Cause::Previous => self.state.retreat(),
            _ => self.state.advance(),
        }
        let to = self.state.current_index();
        self.notify(CarouselEvent::SlideChanged { from, to, cause });
    }

    fn notify(&mut self, event: CarouselEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}

impl Drop for Carousel {
    fn drop(&mut self) {
        // No timer may outlive the widget
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    const INTERVAL: Duration = Duration::from_millis(5000);

    fn three_slides() -> Carousel {
        let slides = vec![
            Slide::new("a.png", "A"),
            Slide::new("b.png", "B"),
            Slide::new("c.png", "C"),
        ];
        Carousel::new(slides, INTERVAL).unwrap()
    }

    fn record(carousel: &mut Carousel) -> Rc<RefCell<Vec<CarouselEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        carousel.subscribe(move |event| sink.borrow_mut().push(*event));
        events
    }

    #[test]
    fn rejects_empty_slide_list() {
        assert!(matches!(Carousel::new(Vec::new(), INTERVAL), Err(CarouselError::NoSlides)));
    }

    #[test]
    fn rejects_zero_interval() {
        let slides = vec![Slide::new("a.png", "A")];
        assert!(matches!(
            Carousel::new(slides, Duration::ZERO),
            Err(CarouselError::ZeroInterval)
        ));
    }

    #[test]
    fn hover_before_mount_stays_paused() {
        let mut carousel = three_slides();
        carousel.set_pointer_inside(true);
        carousel.mount();
        carousel.set_pointer_inside(true);
        assert!(!carousel.is_autoplaying());
        carousel.update(INTERVAL * 2);
        assert_eq!(carousel.current_index(), 0);

        carousel.set_pointer_inside(false);
        assert!(carousel.is_autoplaying());
        carousel.update(INTERVAL);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn long_frame_emits_one_event_per_interval() {
        let mut carousel = three_slides();
        carousel.mount();
        let events = record(&mut carousel);
        carousel.update(Duration::from_millis(12_000));
        assert_eq!(
            *events.borrow(),
            vec![
                CarouselEvent::SlideChanged { from: 0, to: 1, cause: Cause::Autoplay },
                CarouselEvent::SlideChanged { from: 1, to: 2, cause: Cause::Autoplay },
            ]
        );
    }

    #[test]
    fn first_slide_active_before_mount() {
        let carousel = three_slides();
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.is_active(0));
        assert!(!carousel.is_active(1));
        assert_eq!(carousel.active_slide().alt_text(), "A");
        assert!(!carousel.is_empty());
        assert!(!carousel.is_autoplaying());
    }

    #[test]
    fn unmounted_carousel_does_not_autoplay() {
        let mut carousel = three_slides();
        carousel.update(INTERVAL * 4);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn navigation_notifies_with_cause() {
        let mut carousel = three_slides();
        let events = record(&mut carousel);
        carousel.retreat();
        carousel.advance();
        carousel.select_slide(2).unwrap();
        assert_eq!(
            *events.borrow(),
            vec![
                CarouselEvent::SlideChanged { from: 0, to: 2, cause: Cause::Previous },
                CarouselEvent::SlideChanged { from: 2, to: 0, cause: Cause::Next },
                CarouselEvent::SlideChanged { from: 0, to: 2, cause: Cause::Select },
            ]
        );
    }

    #[test]
    fn selecting_active_slide_still_notifies() {
        let mut carousel = three_slides();
        let events = record(&mut carousel);
        carousel.select_slide(0).unwrap();
        assert_eq!(
            *events.borrow(),
            vec![CarouselEvent::SlideChanged { from: 0, to: 0, cause: Cause::Select }]
        );
    }

    #[test]
    fn out_of_range_select_is_silent() {
        let mut carousel = three_slides();
        let events = record(&mut carousel);
        assert!(carousel.select_slide(7).is_err());
        assert_eq!(carousel.current_index(), 0);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn mount_twice_starts_one_timer() {
        let mut carousel = three_slides();
        let events = record(&mut carousel);
        carousel.mount();
        carousel.mount();
        carousel.start_autoplay();
        assert_eq!(*events.borrow(), vec![CarouselEvent::AutoplayStarted]);
        carousel.update(INTERVAL);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn stop_without_timer_emits_nothing() {
        let mut carousel = three_slides();
        let events = record(&mut carousel);
        carousel.stop_autoplay();
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn autoplay_ticks_are_tagged() {
        let mut carousel = three_slides();
        carousel.mount();
        let events = record(&mut carousel);
        carousel.update(INTERVAL);
        assert_eq!(
            *events.borrow(),
            vec![CarouselEvent::SlideChanged { from: 0, to: 1, cause: Cause::Autoplay }]
        );
    }

    #[test]
    fn hover_polling_fires_on_edges_only() {
        let mut carousel = three_slides();
        carousel.mount();
        let events = record(&mut carousel);
        carousel.set_pointer_inside(true);
        carousel.set_pointer_inside(true);
        carousel.set_pointer_inside(false);
        carousel.set_pointer_inside(false);
        assert_eq!(
            *events.borrow(),
            vec![CarouselEvent::AutoplayStopped, CarouselEvent::AutoplayStarted]
        );
    }

    #[test]
    fn pointer_leave_after_unmount_stays_stopped() {
        let mut carousel = three_slides();
        carousel.mount();
        carousel.pointer_enter();
        carousel.unmount();
        carousel.pointer_leave();
        assert!(!carousel.is_autoplaying());
        carousel.update(INTERVAL * 2);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn unsubscribed_listener_stops_receiving() {
        let mut carousel = three_slides();
        let events = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&events);
        let id = carousel.subscribe(move |_| *sink.borrow_mut() += 1);
        carousel.advance();
        assert!(carousel.unsubscribe(id));
        assert!(!carousel.unsubscribe(id));
        carousel.advance();
        assert_eq!(*events.borrow(), 1);
    }

    #[test]
    fn drop_stops_autoplay() {
        let mut carousel = three_slides();
        carousel.mount();
        let events = record(&mut carousel);
        drop(carousel);
        assert_eq!(*events.borrow(), vec![CarouselEvent::AutoplayStopped]);
    }
}
