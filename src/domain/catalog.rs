use std::path::Path;

use chrono::{DateTime, Utc};
use log::info;

use super::{AppError, Gain, GainList, MetaConfig, MetaRecord, Stream, StreamList, load_list};
use crate::ports::TableSource;

/// The gains and streams of one metadata snapshot.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    gains: GainList,
    streams: StreamList,
}

/// Two single-component gains for the same target whose spans overlap.
#[derive(Debug, Clone, PartialEq)]
pub struct GainOverlap {
    pub first: Gain,
    pub second: Gain,
}

impl Catalog {
    pub fn new(gains: Vec<Gain>, streams: Vec<Stream>) -> Self {
        Self { gains: GainList::new(gains), streams: StreamList::new(streams) }
    }

    /// Load every table named in `config`, relative to `root`.
    pub fn load<S>(source: &S, root: &Path, config: &MetaConfig) -> Result<Self, AppError>
    where
        S: TableSource + ?Sized,
    {
        let format = &config.datetime_format;
        let mut catalog = Catalog::default();

        load_list(source, &root.join(&config.files.gains), &mut catalog.gains, format)?;
        load_list(source, &root.join(&config.files.streams), &mut catalog.streams, format)?;
        catalog.gains.sort();
        catalog.streams.sort();

        info!(
            "loaded {} gains and {} streams from {}",
            catalog.gains.len(),
            catalog.streams.len(),
            root.display()
        );
        Ok(catalog)
    }

    pub fn gains(&self) -> &[Gain] {
        &self.gains
    }

    pub fn streams(&self) -> &[Stream] {
        &self.streams
    }

    /// All gains split into single-component entries, sorted.
    pub fn expanded_gains(&self) -> Vec<Gain> {
        let mut gains: Vec<Gain> = self.gains.iter().flat_map(Gain::gains).collect();
        gains.sort_by(|a, b| a.order(b));
        gains
    }

    /// Single-component gains for `station:location:component` that apply at `at`.
    pub fn gains_at(&self, id: &str, at: DateTime<Utc>) -> Vec<Gain> {
        self.expanded_gains()
            .into_iter()
            .filter(|gain| gain.id() == id && gain.span.contains(at))
            .collect()
    }

    /// Streams of `station` that were recording at `at`.
    pub fn streams_at(&self, station: &str, at: DateTime<Utc>) -> Vec<&Stream> {
        self.streams
            .iter()
            .filter(|stream| stream.station == station && stream.span.contains(at))
            .collect()
    }

    /// Pairs of gains for the same station, location, sublocation and component whose spans
    /// overlap.
    pub fn gain_overlaps(&self) -> Vec<GainOverlap> {
        let gains = self.expanded_gains();
        let mut overlaps = Vec::new();

        for (i, first) in gains.iter().enumerate() {
            for second in &gains[i + 1..] {
                if first.id() != second.id() || first.sublocation != second.sublocation {
                    // Expanded gains are sorted by target, so later entries cannot match either.
                    break;
                }
                if first.span.overlaps(&second.span) {
                    overlaps.push(GainOverlap { first: first.clone(), second: second.clone() });
                }
            }
        }

        overlaps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimeFormat;

    fn gain(row: &str) -> Gain {
        let cells: Vec<String> = row.split(',').map(str::to_string).collect();
        Gain::decode_row(&cells, &TimeFormat::default()).unwrap()
    }

    fn stream(row: &str) -> Stream {
        let cells: Vec<String> = row.split(',').map(str::to_string).collect();
        Stream::decode_row(&cells, &TimeFormat::default()).unwrap()
    }

    #[test]
    fn expanded_gains_are_single_component_and_sorted() {
        let catalog = Catalog::new(
            vec![
                gain("WEL,20,,ZN,2,,,2010-01-01T00:00:00Z,9999-01-01T00:00:00Z"),
                gain("AAA,20,,E,,,,2010-01-01T00:00:00Z,9999-01-01T00:00:00Z"),
            ],
            vec![],
        );
        let ids: Vec<String> = catalog.expanded_gains().iter().map(Gain::id).collect();
        assert_eq!(ids, vec!["AAA:20:E", "WEL:20:N", "WEL:20:Z"]);
    }

    #[test]
    fn gains_at_filters_by_id_and_time() {
        let catalog = Catalog::new(
            vec![
                gain("WEL,20,,ZNE,2,,,2010-01-01T00:00:00Z,2012-01-01T00:00:00Z"),
                gain("WEL,20,,Z,3,,,2012-01-01T00:00:00Z,9999-01-01T00:00:00Z"),
            ],
            vec![],
        );
        let format = TimeFormat::default();
        let at = format.parse("2011-06-01T00:00:00Z").unwrap();
        let found = catalog.gains_at("WEL:20:Z", at);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].scale.factor.value(), 2.0);

        let later = format.parse("2015-01-01T00:00:00Z").unwrap();
        assert_eq!(catalog.gains_at("WEL:20:Z", later)[0].scale.factor.value(), 3.0);
        assert!(catalog.gains_at("WEL:20:N", later).is_empty());
    }

    #[test]
    fn overlapping_gains_are_reported() {
        let catalog = Catalog::new(
            vec![
                gain("WEL,20,,ZN,2,,,2010-01-01T00:00:00Z,2013-01-01T00:00:00Z"),
                gain("WEL,20,,Z,3,,,2012-01-01T00:00:00Z,9999-01-01T00:00:00Z"),
                gain("WEL,20,,N,3,,,2013-01-01T00:00:00Z,9999-01-01T00:00:00Z"),
                gain("WEL,20,A,Z,3,,,2012-01-01T00:00:00Z,9999-01-01T00:00:00Z"),
            ],
            vec![],
        );
        let overlaps = catalog.gain_overlaps();
        assert_eq!(overlaps.len(), 1);
        assert_eq!(overlaps[0].first.subsource, "Z");
        assert_eq!(overlaps[0].first.scale.factor.value(), 2.0);
        assert_eq!(overlaps[0].second.scale.factor.value(), 3.0);
    }

    #[test]
    fn streams_at_filters_by_station_and_time() {
        let catalog = Catalog::new(
            vec![],
            vec![
                stream("WEL,10,H,H,100,,false,false,2010-01-01T00:00:00Z,9999-01-01T00:00:00Z"),
                stream("WEL,10,H,H,50,,false,false,2000-01-01T00:00:00Z,2010-01-01T00:00:00Z"),
                stream("TAU,10,H,H,100,,false,false,2000-01-01T00:00:00Z,9999-01-01T00:00:00Z"),
            ],
        );
        let at = TimeFormat::default().parse("2005-01-01T00:00:00Z").unwrap();
        let found = catalog.streams_at("WEL", at);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].sampling_rate.value(), 50.0);
    }
}
