//! Built-in catalog: Pune's monitored hotspots and current incident feed.

use chrono::{DateTime, Duration, Utc};

use gs_feed_model::{
    Alert, AlertCategory, AqiReading, CityEvent, Coordinate, EmergencyVehicle, EventStatus,
    HourlyVolume, Junction, Severity, SignalPhase, TrafficImpact, TrafficPrediction, TrafficStats,
    VehicleClass, VehicleStatus, WeeklyTrend, ZoneShare,
};

use crate::catalog::Catalog;

pub(crate) fn catalog(now: DateTime<Utc>) -> Catalog {
    Catalog {
        junctions: junctions(),
        alerts: alerts(now),
        emergency_vehicles: emergency_vehicles(),
        aqi: AqiReading {
            current: 118,
            pm25: 48.0,
            pm10: 86.0,
            no2: 38.0,
            o3: 28.0,
            co: 1.4,
            last_updated: now,
        },
        stats: TrafficStats {
            total_vehicles: 52_890,
            avg_speed: 24.0,
            total_accidents: 4,
            emergency_responses: 15,
            green_corridors_active: 2,
            congestion_reduction: 14.0,
        },
        predictions: predictions(),
        hourly_traffic: hourly_traffic(),
        weekly_trends: weekly_trends(),
        congestion_by_zone: congestion_by_zone(),
        events: events(),
    }
}

#[allow(clippy::too_many_arguments)]
fn junction(
    id: &str,
    name: &str,
    lat: f64,
    lng: f64,
    status: SignalPhase,
    congestion_level: u8,
    avg_speed: f64,
    vehicle_count: u32,
    wait_time: u32,
) -> Junction {
    Junction {
        id: id.into(),
        name: name.into(),
        position: Coordinate::new(lat, lng),
        status,
        congestion_level,
        avg_speed,
        vehicle_count,
        wait_time,
    }
}

fn junctions() -> Vec<Junction> {
    use SignalPhase::{Green, Red, Yellow};
    vec![
        junction("j1", "Swargate Bus Stand", 18.5018, 73.8636, Red, 92, 8.0, 645, 210),
        junction("j2", "Hinjewadi IT Park", 18.5912, 73.7380, Red, 88, 12.0, 567, 180),
        junction("j3", "Kharadi Bypass", 18.5535, 73.9406, Yellow, 65, 25.0, 342, 55),
        junction("j4", "Shivajinagar ST Stand", 18.5308, 73.8475, Yellow, 72, 18.0, 423, 85),
        junction("j5", "Katraj Chowk", 18.4575, 73.8675, Red, 85, 14.0, 498, 145),
        junction("j6", "FC Road Junction", 18.5237, 73.8410, Yellow, 58, 22.0, 287, 48),
        junction("j7", "Senapati Bapat Marg", 18.5362, 73.8297, Yellow, 62, 20.0, 312, 52),
        junction("j8", "Sinhagad Road Chowk", 18.4898, 73.8247, Red, 78, 15.0, 412, 95),
        junction("j9", "Pune-Nagar Road", 18.5707, 73.9700, Yellow, 55, 28.0, 245, 42),
        junction("j10", "Hadapsar Junction", 18.5089, 73.9260, Yellow, 68, 22.0, 356, 65),
        junction("j11", "Karve Road", 18.5074, 73.8077, Green, 35, 38.0, 178, 22),
        junction("j12", "Paud Phata", 18.5150, 73.7936, Green, 42, 32.0, 198, 28),
        junction("j13", "Bajirao Road", 18.5160, 73.8553, Yellow, 52, 25.0, 267, 38),
        junction("j14", "Neelayam Chowk", 18.4856, 73.8512, Red, 82, 12.0, 445, 125),
        junction("j15", "Wakad Bridge", 18.5950, 73.7650, Yellow, 60, 24.0, 298, 50),
        junction("j16", "Nashik Phata", 18.6298, 73.7997, Yellow, 58, 26.0, 278, 45),
        junction("j17", "Bund Garden Road", 18.5370, 73.8850, Green, 38, 35.0, 189, 25),
        junction("j18", "Viman Nagar Chowk", 18.5679, 73.9143, Green, 32, 40.0, 156, 18),
    ]
}

fn alert(
    id: &str,
    category: AlertCategory,
    severity: Severity,
    title: &str,
    description: &str,
    location: &str,
    timestamp: DateTime<Utc>,
) -> Alert {
    Alert {
        id: id.into(),
        category,
        severity,
        title: title.into(),
        description: description.into(),
        location: location.into(),
        timestamp,
        is_active: true,
    }
}

fn alerts(now: DateTime<Utc>) -> Vec<Alert> {
    let mins = |m: i64| now - Duration::minutes(m);
    vec![
        alert(
            "a1",
            AlertCategory::Accident,
            Severity::High,
            "Multi-vehicle collision on NH-48",
            "4 vehicles involved near Chandni Chowk flyover. Traffic diverted via Bavdhan.",
            "Chandni Chowk, Kothrud",
            mins(15),
        ),
        alert(
            "a2",
            AlertCategory::Congestion,
            Severity::Critical,
            "Severe congestion at Swargate",
            "Expected delay of 35 minutes. Use Metro or alternate routes via Sarasbaug.",
            "Swargate Bus Terminus",
            mins(5),
        ),
        alert(
            "a3",
            AlertCategory::AirQuality,
            Severity::High,
            "AQI exceeds safe limit in Hadapsar",
            "AQI at 165. Heavy vehicle restrictions in effect. Construction dust control activated.",
            "Hadapsar Industrial Area",
            mins(30),
        ),
        alert(
            "a4",
            AlertCategory::Emergency,
            Severity::Critical,
            "Emergency corridor active",
            "Ambulance en route to Sassoon Hospital. Green corridor via FC Road → JM Road.",
            "Koregaon Park → Sassoon Hospital",
            mins(2),
        ),
        alert(
            "a5",
            AlertCategory::Event,
            Severity::Medium,
            "Ganesh Visarjan procession",
            "Multiple pandals procession towards Lakdi Pool. Traffic diversions planned.",
            "Deccan to Lakdi Pool",
            mins(60),
        ),
        alert(
            "a6",
            AlertCategory::RashDriving,
            Severity::Medium,
            "Rash driving detected on ORR",
            "Vehicle MH-12-AB-4567 flagged for lane violations and overspeeding at 95 km/h.",
            "Outer Ring Road, Wakad",
            mins(8),
        ),
        alert(
            "a7",
            AlertCategory::StolenVehicle,
            Severity::High,
            "Stolen vehicle spotted",
            "Vehicle MH-14-XY-9012 spotted on CCTV. Patrol units notified.",
            "Hinjewadi Phase 2 Entry",
            mins(12),
        ),
        alert(
            "a8",
            AlertCategory::Congestion,
            Severity::High,
            "IT Park exit congestion",
            "Hinjewadi Phase 1-3 exits heavily congested. 45-min delay expected.",
            "Hinjewadi IT Park",
            mins(3),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn vehicle(
    id: &str,
    class: VehicleClass,
    call_sign: &str,
    current_location: Coordinate,
    destination: Coordinate,
    status: VehicleStatus,
    eta: u32,
    priority: u32,
) -> EmergencyVehicle {
    EmergencyVehicle {
        id: id.into(),
        class,
        call_sign: call_sign.into(),
        current_location,
        destination,
        status,
        eta,
        priority,
    }
}

fn emergency_vehicles() -> Vec<EmergencyVehicle> {
    vec![
        // Koregaon Park → Sassoon Hospital
        vehicle(
            "ev1",
            VehicleClass::Ambulance,
            "PUNE-108-A",
            Coordinate::new(18.5370, 73.8850),
            Coordinate::new(18.5308, 73.8475),
            VehicleStatus::EnRoute,
            6,
            1,
        ),
        // Hadapsar → Swargate
        vehicle(
            "ev2",
            VehicleClass::Fire,
            "PMC-FIRE-01",
            Coordinate::new(18.5089, 73.9260),
            Coordinate::new(18.5018, 73.8636),
            VehicleStatus::Responding,
            14,
            1,
        ),
        // Hinjewadi → Wakad
        vehicle(
            "ev3",
            VehicleClass::Police,
            "PCR-100",
            Coordinate::new(18.5912, 73.7380),
            Coordinate::new(18.5950, 73.7650),
            VehicleStatus::EnRoute,
            8,
            2,
        ),
        // Katraj → KEM Hospital, Kothrud
        vehicle(
            "ev4",
            VehicleClass::Ambulance,
            "PUNE-108-B",
            Coordinate::new(18.4575, 73.8675),
            Coordinate::new(18.5074, 73.8077),
            VehicleStatus::OnScene,
            0,
            1,
        ),
        // Kharadi → Viman Nagar
        vehicle(
            "ev5",
            VehicleClass::Police,
            "TRAFFIC-PATROL-05",
            Coordinate::new(18.5535, 73.9406),
            Coordinate::new(18.5679, 73.9143),
            VehicleStatus::Returning,
            5,
            3,
        ),
    ]
}

fn predictions() -> Vec<TrafficPrediction> {
    [("15 mins", 72, 95), ("30 mins", 78, 91), ("1 hour", 65, 84), ("2 hours", 52, 76)]
        .into_iter()
        .map(|(time, congestion_level, confidence)| TrafficPrediction {
            time: time.into(),
            congestion_level,
            confidence,
        })
        .collect()
}

fn hourly_traffic() -> Vec<HourlyVolume> {
    [
        ("00:00", 3_200, 52.0),
        ("02:00", 2_100, 58.0),
        ("04:00", 1_500, 60.0),
        ("06:00", 12_000, 42.0),
        ("08:00", 38_000, 18.0),
        ("10:00", 42_000, 22.0),
        ("12:00", 35_000, 28.0),
        ("14:00", 32_000, 30.0),
        ("16:00", 36_000, 24.0),
        ("18:00", 48_000, 15.0),
        ("20:00", 38_000, 28.0),
        ("22:00", 18_000, 45.0),
    ]
    .into_iter()
    .map(|(hour, vehicles, avg_speed)| HourlyVolume {
        hour: hour.into(),
        vehicles,
        avg_speed,
    })
    .collect()
}

fn weekly_trends() -> Vec<WeeklyTrend> {
    [
        ("Mon", 78, 5),
        ("Tue", 74, 3),
        ("Wed", 76, 4),
        ("Thu", 75, 4),
        ("Fri", 88, 7),
        ("Sat", 62, 3),
        ("Sun", 48, 2),
    ]
    .into_iter()
    .map(|(day, congestion, accidents)| WeeklyTrend {
        day: day.into(),
        congestion,
        accidents,
    })
    .collect()
}

fn congestion_by_zone() -> Vec<ZoneShare> {
    [
        ("Hinjewadi-Wakad", 28),
        ("Central Pune", 24),
        ("Kharadi-Hadapsar", 22),
        ("PCMC", 16),
        ("Katraj-Sinhagad", 10),
    ]
    .into_iter()
    .map(|(name, value)| ZoneShare {
        name: name.into(),
        value,
    })
    .collect()
}

fn events() -> Vec<CityEvent> {
    let event = |id: &str,
                 name: &str,
                 kind: &str,
                 date: &str,
                 time: &str,
                 location: &str,
                 expected_crowds: u32,
                 traffic_impact: TrafficImpact,
                 status: EventStatus| CityEvent {
        id: id.into(),
        name: name.into(),
        kind: kind.into(),
        date: date.into(),
        time: time.into(),
        location: location.into(),
        expected_crowds,
        traffic_impact,
        status,
    };
    vec![
        event(
            "e1",
            "Pune Marathon 2026",
            "Sports",
            "Feb 16, 2026",
            "05:30 - 11:00",
            "Swargate to University Road",
            45_000,
            TrafficImpact::High,
            EventStatus::Upcoming,
        ),
        event(
            "e2",
            "Ganesh Chaturthi Visarjan",
            "Festival",
            "Sep 17, 2026",
            "12:00 - 23:00",
            "Deccan to Lakdi Pool",
            200_000,
            TrafficImpact::High,
            EventStatus::Upcoming,
        ),
        event(
            "e3",
            "Tech Summit Pune 2026",
            "Conference",
            "Mar 15, 2026",
            "09:00 - 18:00",
            "Hinjewadi IT Park, Phase 2",
            25_000,
            TrafficImpact::High,
            EventStatus::Upcoming,
        ),
        event(
            "e4",
            "Sawai Gandharva Music Festival",
            "Cultural",
            "Dec 12, 2026",
            "18:00 - 23:00",
            "New English School Ground, Tilak Road",
            15_000,
            TrafficImpact::Medium,
            EventStatus::Upcoming,
        ),
        event(
            "e5",
            "Republic Day Parade",
            "National Event",
            "Jan 26, 2026",
            "08:00 - 11:00",
            "Shivaji Nagar to Council Hall",
            20_000,
            TrafficImpact::High,
            EventStatus::Completed,
        ),
    ]
}
