//! Terminal application state and key handling

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use market_client::MarketplaceApi;
use ratatui::widgets::ListState;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;
use tui_logger::{TuiWidgetEvent, TuiWidgetState};

use crate::view::{FilterField, ViewController, ViewEvent};

/// Which part of the screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Filter(FilterField),
    Activities,
    Bookings,
}

impl Focus {
    /// Tab order: filters, activities, bookings
    pub fn next(self) -> Self {
        match self {
            Self::Filter(FilterField::City) => Self::Filter(FilterField::Category),
            Self::Filter(FilterField::Category) => Self::Filter(FilterField::MaxPrice),
            Self::Filter(FilterField::MaxPrice) => Self::Activities,
            Self::Activities => Self::Bookings,
            Self::Bookings => Self::Filter(FilterField::City),
        }
    }
}

pub struct App<A> {
    pub controller: ViewController<A>,
    pub api_url: String,
    pub focus: Focus,
    pub city: Input,
    pub category: Input,
    pub max_price: Input,
    pub activities: ListState,
    pub bookings: ListState,
    pub logger_state: TuiWidgetState,
    pub should_quit: bool,
}

impl<A: MarketplaceApi + 'static> App<A> {
    pub fn new(controller: ViewController<A>, api_url: impl Into<String>) -> Self {
        Self {
            controller,
            api_url: api_url.into(),
            focus: Focus::Activities,
            city: Input::default(),
            category: Input::default(),
            max_price: Input::default(),
            activities: ListState::default(),
            bookings: ListState::default(),
            logger_state: TuiWidgetState::new(),
            should_quit: false,
        }
    }

    pub fn input(&self, field: FilterField) -> &Input {
        match field {
            FilterField::City => &self.city,
            FilterField::Category => &self.category,
            FilterField::MaxPrice => &self.max_price,
        }
    }

    fn input_mut(&mut self, field: FilterField) -> &mut Input {
        match field {
            FilterField::City => &mut self.city,
            FilterField::Category => &mut self.category,
            FilterField::MaxPrice => &mut self.max_price,
        }
    }

    /// Fold a completion into the view and keep selections in range
    pub fn on_event(&mut self, event: ViewEvent) {
        self.controller.apply(event);
        let state = self.controller.state();
        clamp(&mut self.activities, state.activities.items.len());
        clamp(&mut self.bookings, state.bookings.items.len());
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Other Ctrl chords are line editing inside a filter and ignored elsewhere
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('l') => {
                    self.clear_filters();
                    return;
                }
                _ if !matches!(self.focus, Focus::Filter(_)) => return,
                _ => {}
            }
        }

        if key.code == KeyCode::Tab {
            self.focus = self.focus.next();
            return;
        }

        match self.focus {
            Focus::Filter(field) => match key.code {
                KeyCode::Enter => self.controller.search(),
                KeyCode::Esc => self.focus = Focus::Activities,
                _ => {
                    let input = self.input_mut(field);
                    input.handle_event(&Event::Key(key));
                    let value = input.value().to_string();
                    self.controller.set_filter(field, value);
                }
            },
            Focus::Activities => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Up => select_prev(&mut self.activities),
                KeyCode::Down => {
                    select_next(&mut self.activities, self.controller.state().activities.items.len())
                }
                KeyCode::Char('b') | KeyCode::Enter => self.book_selected(),
                KeyCode::Char('/') | KeyCode::Char('f') => self.focus = Focus::Filter(FilterField::City),
                KeyCode::Char('c') => self.clear_filters(),
                KeyCode::Char('m') => self.controller.load_my_bookings(),
                KeyCode::Char('r') => self.controller.search(),
                _ => self.scroll_logs(key.code),
            },
            Focus::Bookings => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Up => select_prev(&mut self.bookings),
                KeyCode::Down => {
                    select_next(&mut self.bookings, self.controller.state().bookings.items.len())
                }
                KeyCode::Char('x') | KeyCode::Delete => self.cancel_selected(),
                KeyCode::Char('m') | KeyCode::Char('r') => self.controller.load_my_bookings(),
                _ => self.scroll_logs(key.code),
            },
        }
    }

    fn clear_filters(&mut self) {
        self.city.reset();
        self.category.reset();
        self.max_price.reset();
        self.controller.clear();
    }

    fn book_selected(&mut self) {
        let selected = self
            .activities
            .selected()
            .and_then(|i| self.controller.state().activities.items.get(i))
            .map(|a| a.id);
        if let Some(activity_id) = selected {
            self.controller.book(activity_id);
        }
    }

    fn cancel_selected(&mut self) {
        let selected = self
            .bookings
            .selected()
            .and_then(|i| self.controller.state().bookings.items.get(i))
            .map(|b| b.id);
        if let Some(booking_id) = selected {
            self.controller.cancel_booking(booking_id);
        }
    }

    fn scroll_logs(&mut self, code: KeyCode) {
        match code {
            KeyCode::PageUp => self.logger_state.transition(TuiWidgetEvent::PrevPageKey),
            KeyCode::PageDown => self.logger_state.transition(TuiWidgetEvent::NextPageKey),
            _ => {}
        }
    }
}

fn select_prev(list: &mut ListState) {
    let i = list.selected().map_or(0, |i| i.saturating_sub(1));
    list.select(Some(i));
}

fn select_next(list: &mut ListState, len: usize) {
    if len == 0 {
        list.select(None);
        return;
    }
    let i = list.selected().map_or(0, |i| (i + 1).min(len - 1));
    list.select(Some(i));
}

fn clamp(list: &mut ListState, len: usize) {
    match (list.selected(), len) {
        (_, 0) => list.select(None),
        (None, _) => list.select(Some(0)),
        (Some(i), len) if i >= len => list.select(Some(len - 1)),
        _ => {}
    }
}
