//! The built-in themed menu.

use crate::catalog::{CatalogItem, Motif};
use crate::money::{Currency, Money};

const IMAGE_QUERY: &str = "?auto=format&fit=crop&w=400&q=60";

fn image(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}{IMAGE_QUERY}")
}

fn usd(cents: i64) -> Money {
    Money::new(cents, Currency::USD)
}

/// Items in menu order. Prices are USD cents.
pub(crate) fn builtin_items() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new(
            "m1",
            "Giant's Hearty Stew",
            usd(1200),
            "A fulfilling stew, just like Gian would make (if he could cook!).",
            image("photo-1559847844-5315695dadae"),
            "Main Dishes",
        )
        .with_motif(Motif::ChefHat),
        CatalogItem::new(
            "m2",
            "Time Machine Pasta",
            usd(1500),
            "Pasta that takes your tastebuds on a journey through time!",
            image("photo-1551183024-c89408900036"),
            "Main Dishes",
        )
        .with_motif(Motif::Zap),
        CatalogItem::new(
            "s1",
            "Classic Dorayaki",
            usd(350),
            "Doraemon's absolute favorite! Sweet red bean paste between fluffy pancakes.",
            image("photo-1610192243920-e03d70a2e2a7"),
            "Snacks & Sides",
        )
        .with_motif(Motif::Star),
        CatalogItem::new(
            "s2",
            "Memory Bread Toasties",
            usd(450),
            "Crunchy toast that helps you ace your tests. Comes with jam!",
            image("photo-1484723091739-30a097e8f929"),
            "Snacks & Sides",
        )
        .with_motif(Motif::Gift),
        CatalogItem::new(
            "s3",
            "Anywhere Door Fries",
            usd(400),
            "Crispy fries that can transport you to a world of flavor.",
            image("photo-1576107232684-1279f390859f"),
            "Snacks & Sides",
        ),
        CatalogItem::new(
            "d1",
            "Translation Jelly Delight",
            usd(550),
            "A wobbly jelly that lets you understand any animal... or just enjoy its fruity taste!",
            image("photo-1549397225-8350003bcc08"),
            "Desserts",
        )
        .with_motif(Motif::IceCream),
        CatalogItem::new(
            "d2",
            "Small Light Sundae",
            usd(600),
            "A miniature sundae packed with giant flavor. Perfect for a tiny adventure.",
            image("photo-1570197788417-0e82375c9371"),
            "Desserts",
        ),
        CatalogItem::new(
            "dr1",
            "Take-Kopter Refresher",
            usd(300),
            "A fizzy drink that will make you feel like you're flying!",
            image("photo-1534353455494-5d96f0102c59"),
            "Drinks",
        )
        .with_motif(Motif::Coffee),
        CatalogItem::new(
            "dr2",
            "Doraemon Blue Sky Soda",
            usd(320),
            "A vibrant blue soda, as cheerful as Doraemon himself.",
            image("photo-1600788886048-1450a4085892"),
            "Drinks",
        ),
        CatalogItem::new(
            "s4",
            "Gulliver Tunnel Gummy",
            usd(250),
            "A long gummy that stretches your imagination (and your stomach).",
            image("photo-1580827010767-01e6d0f081f2"),
            "Snacks & Sides",
        )
        .with_motif(Motif::Zap),
        CatalogItem::new(
            "m3",
            "Nobita's Naptime Noodles",
            usd(900),
            "Comforting noodles, perfect for a pre-nap meal. Guaranteed good dreams!",
            image("photo-1585032226651-759b368d7246"),
            "Main Dishes",
        ),
        CatalogItem::new(
            "d3",
            "Shizuka's Sweet Symphony Cake",
            usd(700),
            "An elegant slice of cake, as sweet and graceful as Shizuka.",
            image("photo-1588195538326-c5b1e9f80a1b"),
            "Desserts",
        )
        .with_motif(Motif::Star),
        CatalogItem::new(
            "dr3",
            "What-If Phone Fizzy Drink",
            usd(350),
            "A mysterious drink that might change its flavor! What if it does?",
            image("photo-1581006852262-5904100b1301"),
            "Drinks",
        ),
    ]
}
