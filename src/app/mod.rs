// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page sections.
//!
//! The `App` struct wires together the domains (catalog, localization,
//! delivery client, section states) and translates messages into side
//! effects like the scroll-to-section tasks and the asynchronous email
//! send. Policy decisions (window sizing, navigation alignment) stay close
//! to the main update loop so user-facing behavior is easy to audit.

mod message;
pub mod section;
mod view;

pub use message::{Flags, Message};

use crate::catalog::{self, Painting};
use crate::config;
use crate::email;
use crate::i18n::fluent::I18n;
use crate::ui::contact;
use crate::ui::gallery;
use crate::ui::navbar;
use iced::widget::{image, operation};
use iced::{window, Element, Task, Theme};
use section::Section;
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state bridging the page sections, localization,
/// and the outbound delivery client.
pub struct App {
    pub i18n: I18n,
    mailer: email::Client,
    paintings: Vec<Painting>,
    hero_background: Option<image::Handle>,
    gallery: gallery::State,
    contact: contact::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("paintings", &self.paintings.len())
            .field("dialog_open", &self.gallery.is_open())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (the boot closure must be Fn).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            mailer: email::Client::new(config::EmailConfig::default()),
            paintings: catalog::paintings(),
            hero_background: None,
            gallery: gallery::State::new(),
            contact: contact::State::new(),
        }
    }
}

impl App {
    /// Initializes application state and kicks off the hero-background fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let app = App {
            i18n,
            mailer: email::Client::new(config.email),
            ..Self::default()
        };

        let task = Task::perform(
            catalog::fetch_hero_background(catalog::HERO_BACKGROUND_URL.to_string()),
            Message::HeroBackgroundLoaded,
        );

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(navbar_message) => match navbar::update(navbar_message) {
                navbar::Event::Navigate(section) => scroll_to_section(section),
            },
            Message::Gallery(gallery_message) => {
                gallery::update(&mut self.gallery, gallery_message);
                Task::none()
            }
            Message::Contact(contact_message) => {
                match contact::update(&mut self.contact, contact_message) {
                    contact::Event::None => Task::none(),
                    contact::Event::Send(payload) => {
                        let mailer = self.mailer.clone();
                        Task::perform(async move { mailer.send(payload).await }, |result| {
                            Message::Contact(contact::Message::Delivered(result))
                        })
                    }
                }
            }
            Message::HeroBackgroundLoaded(Ok(bytes)) => {
                self.hero_background = Some(image::Handle::from_bytes(bytes));
                Task::none()
            }
            Message::HeroBackgroundLoaded(Err(err)) => {
                // The hero simply stays blank; nothing to recover.
                log::warn!("hero background unavailable: {}", err);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            paintings: &self.paintings,
            hero_background: self.hero_background.as_ref(),
            gallery: &self.gallery,
            contact: &self.contact,
        })
    }
}

/// Brings the given section into view.
///
/// When the page scrollable is not mounted yet the operation resolves no
/// target and the request is a silent no-op.
fn scroll_to_section(section: Section) -> Task<Message> {
    operation::snap_to(view::page_scroll_id(), section.page_offset())
}
