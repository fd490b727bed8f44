//! `/api/meetings` - meeting lifecycle, registrants, recordings and reports.
//!
//! `POST /:userId` creates a meeting owned by that user; every other
//! single-segment route takes a meeting id.

use super::RouteDescriptor;

pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor::get("/:meetingId", "/meetings/{meetingId}")
        .failure("Error fetching meeting: {meetingId}"),
    RouteDescriptor::post("/:userId", "/users/{userId}/meetings").failure("Error creating meeting"),
    RouteDescriptor::patch("/:meetingId", "/meetings/{meetingId}")
        .failure("Error updating meeting: {meetingId}"),
    RouteDescriptor::delete("/:meetingId", "/meetings/{meetingId}")
        .failure("Error deleting meeting: {meetingId}"),
    RouteDescriptor::get("/report/:meetingId/participants", "/report/meetings/{meetingId}/participants")
        .query(&["next_page_token"])
        .failure("Error fetching participants report for meeting: {meetingId}"),
    RouteDescriptor::delete("/:meetingId/recordings", "/meetings/{meetingId}/recordings")
        .query(&["action"])
        .failure("Error deleting recordings for meeting: {meetingId}"),
    RouteDescriptor::get("/:meetingId/registrants", "/meetings/{meetingId}/registrants")
        .query(&["status", "next_page_token"])
        .failure("Error fetching registrants for meeting: {meetingId}"),
    RouteDescriptor::post("/:meetingId/registrants", "/meetings/{meetingId}/registrants")
        .failure("Error adding registrant to meeting: {meetingId}"),
    RouteDescriptor::put("/:meetingId/registrants/status", "/meetings/{meetingId}/registrants/status")
        .failure("Error updating registrant status for meeting: {meetingId}"),
    RouteDescriptor::get("/past_meetings/:meetingUUID", "/past_meetings/{meetingUUID}")
        .failure("Error fetching meeting details for meeting: {meetingUUID}"),
    RouteDescriptor::get("/past_meetings/:meetingUUID/participants", "/past_meetings/{meetingUUID}/participants")
        .query(&["next_page_token"])
        .failure("Error fetching participants for meeting: {meetingUUID}"),
];
