use crate::domain::Listing;
use maud::{html, Markup};

pub fn listing_card(listing: &Listing) -> Markup {
    html! {
        article class="card" {
            @if !listing.image_url.is_empty() {
                img src=(listing.image_url) alt=(listing.title) loading="lazy";
            }
            div class="card-body" {
                h2 { (listing.title) }
                p class="address" { (listing.address) }
                p class="price" { (listing.price) }
                span class="type" { (listing.estate_type) }
            }
        }
    }
}
