//! `/api/dashboard` - account-wide meeting and webinar metrics.

use super::RouteDescriptor;

pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor::get("/metrics/meetings", "/metrics/meetings")
        .query(&["type", "next_page_token"])
        .failure("Error fetching meeting metrics"),
    RouteDescriptor::get("/metrics/webinars", "/metrics/webinars")
        .query(&["type", "next_page_token"])
        .failure("Error fetching webinar metrics"),
    RouteDescriptor::get(
        "/metrics/meetings/:meetingId/participants/:participantId/qos",
        "/metrics/meetings/{meetingId}/participants/{participantId}/qos",
    )
    .query(&["type"])
    .failure("Error fetching QoS for participant {participantId} in meeting: {meetingId}"),
    RouteDescriptor::get(
        "/metrics/webinars/:webinarId/participants/:participantId/qos",
        "/metrics/webinars/{webinarId}/participants/{participantId}/qos",
    )
    .query(&["type"])
    .failure("Error fetching QoS for participant {participantId} in webinar: {webinarId}"),
];
