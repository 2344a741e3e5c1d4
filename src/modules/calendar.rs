use crate::modules::models::query::{current_season, FIRST_YEAR, NUM_OF_RACES};

/// Every `(season, round)` pair between two seasons, season by season.
/// Clone it to walk the same calendar again.
#[derive(Debug, Clone)]
pub struct RaceCalendar {
    last_season: i32,
    rounds: u32,
    next: Option<(i32, u32)>,
}

impl RaceCalendar {
    pub fn new(first_season: i32, last_season: i32, rounds: u32) -> RaceCalendar {
        let next = if first_season <= last_season && rounds > 0 {
            Some((first_season, 1))
        } else {
            None
        };

        RaceCalendar {
            last_season,
            rounds,
            next,
        }
    }

    /// every round of every season results can be requested for
    pub fn supported() -> RaceCalendar {
        RaceCalendar::new(FIRST_YEAR, current_season(), NUM_OF_RACES)
    }
}

impl Iterator for RaceCalendar {
    type Item = (i32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        let (season, round) = self.next?;

        self.next = if round < self.rounds {
            Some((season, round + 1))
        } else if season < self.last_season {
            Some((season + 1, 1))
        } else {
            None
        };

        Some((season, round))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            Some((season, round)) => {
                let later_seasons = (self.last_season - season) as usize;
                later_seasons * self.rounds as usize + (self.rounds - round + 1) as usize
            }
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_rounds_inside_seasons() {
        let pairs: Vec<(i32, u32)> = RaceCalendar::new(2014, 2015, 3).collect();
        assert_eq!(
            pairs,
            vec![(2014, 1), (2014, 2), (2014, 3), (2015, 1), (2015, 2), (2015, 3)]
        );
    }

    #[test]
    fn clones_restart_from_the_same_point() {
        let mut calendar = RaceCalendar::new(2020, 2021, 17);
        calendar.next();
        let copy = calendar.clone();
        assert_eq!(calendar.count(), 33);
        assert_eq!(copy.size_hint(), (33, Some(33)));
    }

    #[test]
    fn empty_ranges_yield_nothing() {
        assert_eq!(RaceCalendar::new(2021, 2020, 17).count(), 0);
        assert_eq!(RaceCalendar::new(2021, 2021, 0).count(), 0);
    }

    #[test]
    fn supported_calendar_starts_at_the_first_season() {
        let mut calendar = RaceCalendar::supported();
        assert_eq!(calendar.next(), Some((FIRST_YEAR, 1)));
        assert_eq!(calendar.last().map(|(_, round)| round), Some(NUM_OF_RACES));
    }
}
