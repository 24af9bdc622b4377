pub mod anchor;
pub mod config;
pub mod contact;
pub mod hooks;
pub mod menu;
pub mod reveal;
pub mod rotator;

pub mod components {
    pub mod fade_in;
    pub mod hero_slider;
    pub mod product_card;
}

pub mod pages {
    pub mod home;
}
