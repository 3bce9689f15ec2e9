//! Integration tests for the world-readable room highlights and hotel
//! directory.

mod common;

use std::time::Duration;

use hotelier_booking::{MAX_ROOM_HIGHLIGHTS, RoomPresentation};
use hotelier_core::models::room::CreateRoom;
use hotelier_core::repository::RoomRepository;
use rust_decimal::Decimal;
use uuid::Uuid;

use common::{seed_hotel, seed_room, setup, staff};

async fn pause() {
    tokio::time::sleep(Duration::from_millis(5)).await;
}

#[tokio::test]
async fn highlights_are_newest_first_and_limited() {
    let h = setup().await;
    let hotel = seed_hotel(&h, "LIS", "Lisbon").await;

    for number in ["101", "102", "103", "104"] {
        seed_room(&h, hotel.id, number, 10000).await;
        pause().await;
    }

    let top = h.public.room_highlights(3, None).await.unwrap();
    let numbers: Vec<_> = top.iter().map(|r| r.room_number.as_str()).collect();
    assert_eq!(numbers, vec!["104", "103", "102"]);
}

#[tokio::test]
async fn highlight_limit_is_clamped() {
    let h = setup().await;
    let hotel = seed_hotel(&h, "LIS", "Lisbon").await;
    for n in 0..(MAX_ROOM_HIGHLIGHTS + 2) {
        seed_room(&h, hotel.id, &format!("{}", 100 + n), 9000).await;
    }

    assert_eq!(h.public.room_highlights(0, None).await.unwrap().len(), 1);
    assert_eq!(h.public.room_highlights(-3, None).await.unwrap().len(), 1);
    assert_eq!(
        h.public.room_highlights(100, None).await.unwrap().len(),
        MAX_ROOM_HIGHLIGHTS
    );
}

#[tokio::test]
async fn highlights_can_be_limited_to_one_hotel() {
    let h = setup().await;
    let lisbon = seed_hotel(&h, "LIS", "Lisbon").await;
    let porto = seed_hotel(&h, "OPO", "Porto").await;
    seed_room(&h, lisbon.id, "101", 10000).await;
    let porto_room = seed_room(&h, porto.id, "201", 11000).await;

    let only_porto = h.public.room_highlights(10, Some(porto.id)).await.unwrap();
    assert_eq!(only_porto.len(), 1);
    assert_eq!(only_porto[0].id, porto_room.id);
    assert_eq!(only_porto[0].nightly_rate, Decimal::new(11000, 2));

    assert!(
        h.public
            .room_highlights(10, Some(Uuid::new_v4()))
            .await
            .unwrap()
            .is_empty()
    );
    assert_eq!(h.public.room_highlights(10, None).await.unwrap().len(), 2);
}

#[tokio::test]
async fn stored_rooms_without_presentation_get_fallbacks() {
    let h = setup().await;
    let hotel = seed_hotel(&h, "LIS", "Lisbon").await;
    h.gateway
        .room_repo()
        .create(CreateRoom {
            hotel_id: hotel.id,
            room_number: "12".into(),
            room_type: "Family Room".into(),
            nightly_rate: Decimal::new(18000, 2),
            image_url: "data:image/png;base64,AAAA".into(),
            short_description: String::new(),
        })
        .await
        .unwrap();

    let highlights = h.public.room_highlights(5, None).await.unwrap();
    assert_eq!(highlights[0].image_url, RoomPresentation::Family.default_image_url());
    assert_eq!(
        highlights[0].short_description,
        RoomPresentation::Family.default_description()
    );
}

#[tokio::test]
async fn hotel_directory_lists_every_hotel_by_name() {
    let h = setup().await;
    let zulu = seed_hotel(&h, "ZZZ", "Zulu Inn").await;
    seed_hotel(&h, "AAA", "Alpha Lodge").await;
    // A staff mapping restricts management listings, not the directory.
    staff(&h, "clerk", zulu.id).await;

    let names: Vec<_> = h
        .public
        .hotels()
        .await
        .unwrap()
        .into_iter()
        .map(|hotel| hotel.name)
        .collect();
    assert_eq!(names, vec!["Alpha Lodge", "Zulu Inn"]);
}
