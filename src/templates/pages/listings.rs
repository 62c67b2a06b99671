use crate::domain::Listing;
use crate::templates::{components::listing_card, desktop_layout};
use maud::{html, Markup};

const TITLE: &str = "Flat ads";

pub fn listings_page(listings: &[Listing], stylesheet: Option<&str>) -> Markup {
    desktop_layout(
        TITLE,
        stylesheet,
        html! {
            p { (listings.len()) " listings" }

            @if listings.is_empty() {
                p class="empty" { "No listings scraped yet." }
            } @else {
                section class="listings" {
                    @for listing in listings {
                        (listing_card(listing))
                    }
                }
            }
        },
    )
}

pub fn listings_table_page(listings: &[Listing], stylesheet: Option<&str>) -> Markup {
    desktop_layout(
        TITLE,
        stylesheet,
        html! {
            table class="listings-table" {
                thead {
                    tr {
                        th { "#" }
                        th { "Title" }
                        th { "Address" }
                        th { "Price" }
                        th { "Type" }
                    }
                }
                tbody {
                    @for listing in listings {
                        tr {
                            td { (listing.id) }
                            td {
                                @if listing.image_url.is_empty() {
                                    (listing.title)
                                } @else {
                                    a href=(listing.image_url) { (listing.title) }
                                }
                            }
                            td { (listing.address) }
                            td { (listing.price) }
                            td { (listing.estate_type) }
                        }
                    }
                }
            }
        },
    )
}
