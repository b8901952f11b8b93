mod common;

use common::{GAINS_HEADER, STREAMS_HEADER, TestContext};
use sensor_meta::{AppError, TimeFormat, load_catalog, load_gains, load_streams};

#[test]
fn streams_load_sorted() {
    let ctx = TestContext::new();
    let path = ctx.write_streams(&[
        "WEL,10,H,N,-0.5,true,TRUE,0,2010-01-01T00:00:00Z,9999-01-01T00:00:00Z",
        " AAA ,20,B,Z,50,,false,t,2001-02-03T04:05:06Z,2011-12-31T23:59:59Z",
    ]);

    let streams = load_streams(&path).unwrap();
    let format = TimeFormat::default();
    let fields: Vec<_> = streams
        .iter()
        .map(|s| {
            (
                s.station.as_str(),
                s.location.as_str(),
                s.band.as_str(),
                s.source.as_str(),
                s.axial.as_str(),
                s.reversed,
                s.triggered,
            )
        })
        .collect();
    assert_eq!(
        fields,
        vec![
            ("AAA", "20", "B", "Z", "", false, true),
            ("WEL", "10", "H", "N", "true", true, false),
        ]
    );

    assert_eq!(streams[0].sampling_rate.value(), 50.0);
    assert_eq!(streams[1].sampling_rate.value(), 2.0);
    assert_eq!(streams[1].sampling_rate.text(), "-0.5");

    assert_eq!(format.format(&streams[0].span.start), "2001-02-03T04:05:06Z");
    assert_eq!(format.format(&streams[0].span.end), "2011-12-31T23:59:59Z");
    assert_eq!(format.format(&streams[1].span.start), "2010-01-01T00:00:00Z");
    assert_eq!(format.format(&streams[1].span.end), "9999-01-01T00:00:00Z");
}

#[test]
fn gains_reject_short_rows() {
    let ctx = TestContext::new();
    let path = ctx.write_gains(&["WEL,20,,Z,2,,"]);

    let err = load_gains(&path).unwrap_err();
    assert!(matches!(err, AppError::MalformedRow { kind: "gain", expected: 9, found: 7 }));
}

#[test]
fn header_only_table_is_empty() {
    let ctx = TestContext::new();
    let path = ctx.write("install/gains.csv", &format!("{GAINS_HEADER}\n"));
    assert!(load_gains(&path).unwrap().is_empty());
}

#[test]
fn missing_file_is_io_error() {
    let ctx = TestContext::new();
    let err = load_streams(ctx.work_dir().join("nope.csv")).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn catalog_answers_point_in_time_queries() {
    let ctx = TestContext::new();
    ctx.write_gains(&[
        "WEL,20,,ZNE,2,,,2010-01-01T00:00:00Z,2012-01-01T00:00:00Z",
        "WEL,20,,Z,4,0.5,,2012-01-01T00:00:00Z,9999-01-01T00:00:00Z",
    ]);
    ctx.write(
        "install/streams.csv",
        &common::table(
            STREAMS_HEADER,
            &["WEL,20,B,N,50,,false,false,2010-01-01T00:00:00Z,9999-01-01T00:00:00Z"],
        ),
    );

    let catalog = load_catalog(ctx.work_dir()).unwrap();
    let at = TimeFormat::default().parse("2013-01-01T00:00:00Z").unwrap();

    let gains = catalog.gains_at("WEL:20:Z", at);
    assert_eq!(gains.len(), 1);
    assert_eq!(gains[0].scale.apply(1.0), 4.5);
    assert_eq!(catalog.streams_at("WEL", at).len(), 1);
}
