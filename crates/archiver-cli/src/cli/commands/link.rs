//! `archiver link <url>` – print the all-snapshots link.

use archiver_core::view;
use archiver_core::Archiver;

pub fn run_link(archiver: &Archiver, url: &str) {
    println!("{}", view::history_url(archiver.config(), url));
}
