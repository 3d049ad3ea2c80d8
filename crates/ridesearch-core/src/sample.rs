//! A fixed sample feed for demos and tests without a live group.

use crate::feed::{posts_from_raw, RawPost};
use crate::post::Post;

/// Sample records: id, message, update time. Newest first, as feeds arrive.
pub const SAMPLE_RECORDS: [(&str, &str, &str); 8] = [
    (
        "1629026357232795_1005",
        "today's ride to UCSD! leaving soon",
        "2019-05-22T21:00:00+0000",
    ),
    (
        "1629026357232795_1004",
        "DRIVING: UCLA --> UCSD $15 FRIDAY 6PM",
        "2019-05-22T19:30:00+0000",
    ),
    (
        "1629026357232795_1003",
        "looking for UCLA -> UCI Thursday before 9:30 AM!",
        "2019-05-22T18:00:00+0000",
    ),
    (
        "1629026357232795_1002",
        "Driving UCLA -> San Diego on Friday 5/24 at 8pm",
        "2019-05-22T17:15:00+0000",
    ),
    (
        "1629026357232795_1001",
        "Anyone driving to SF for Memorial Day weekend? Can split gas",
        "2019-05-22T16:00:00+0000",
    ),
    (
        "1629026357232795_1000",
        "Driving to Sacramento May 31, back June 2. 3 seats",
        "2019-05-22T15:45:00+0000",
    ),
    (
        "1629026357232795_999",
        "LAX drop-off tonight around 10, $20",
        "2019-05-22T14:00:00+0000",
    ),
    (
        "1629026357232795_998",
        "Looking for a ride to Irvine 5/25, will pay for gas",
        "2019-05-22T12:00:00+0000",
    ),
];

/// The sample feed as posts, in feed order.
pub fn posts() -> Vec<Post> {
    posts_from_raw(SAMPLE_RECORDS.iter().map(|&(id, message, updated_time)| RawPost {
        id: Some(id.to_string()),
        message: Some(message.to_string()),
        updated_time: Some(updated_time.to_string()),
    }))
}
