//! Navigation: face clicks become events; one consumer opens the browser.
//!
//! Keeping the event between the state machine and the opener means tests
//! can observe a click without leaving the app.

use bevy::prelude::*;
use url::Url;

/// A qualifying click on a face.
#[derive(Event, Clone, Debug, PartialEq)]
pub struct NavigateRequest {
    pub face: usize,
    pub url: Url,
}

pub fn navigation_plugin(app: &mut App) {
    app.add_event::<NavigateRequest>()
        .add_systems(Update, open_link_system);
}

fn open_link_system(mut requests: EventReader<NavigateRequest>) {
    for request in requests.read() {
        if let Err(err) = webbrowser::open(request.url.as_str()) {
            eprintln!("navicube: failed to open {}: {err}", request.url);
        }
    }
}
