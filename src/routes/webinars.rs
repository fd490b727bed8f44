//! `/api/webinars` - webinar lifecycle, registrants and participant reports.

use super::RouteDescriptor;

pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor::get("/:webinarId", "/webinars/{webinarId}")
        .failure("Error fetching webinar: {webinarId}"),
    RouteDescriptor::post("/:userId", "/users/{userId}/webinars").failure("Error creating webinar"),
    RouteDescriptor::delete("/:webinarId", "/webinars/{webinarId}")
        .failure("Error deleting webinar: {webinarId}"),
    RouteDescriptor::patch("/:webinarId", "/webinars/{webinarId}")
        .failure("Error updating webinar: {webinarId}"),
    RouteDescriptor::get("/:webinarId/registrants", "/webinars/{webinarId}/registrants")
        .query(&["status", "next_page_token"])
        .failure("Error fetching registrants for webinar: {webinarId}"),
    RouteDescriptor::post("/:webinarId/registrants", "/webinars/{webinarId}/registrants")
        .failure("Error adding registrant to webinar: {webinarId}"),
    RouteDescriptor::put("/:webinarId/registrants/status", "/webinars/{webinarId}/registrants/status")
        .failure("Error updating registrant status for webinar: {webinarId}"),
    RouteDescriptor::get("/report/:webinarId/participants", "/report/webinars/{webinarId}/participants")
        .query(&["next_page_token"])
        .failure("Error fetching participants report for webinar: {webinarId}"),
];
