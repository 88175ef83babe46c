//! Fixed narrative text for the report surface
//!
//! The prose is static by contract; only the chart images and the
//! per-chart mean summaries vary with the data.

pub const TITLE: &str = "Bike Sharing Rental Analysis";

pub const DATASET_DESCRIPTION: &str = "\
This dataset covers bike rentals over the two most recent years of \
observations, aggregated per day. It captures total rentals alongside \
the split between casual and registered users, the weather situation, \
and the position of each day within the week and the year. The three \
questions below look at how weather, season, and user type shape \
rental activity.";

pub const Q1_HEADING: &str =
    "1. How strongly does weather affect weekend rentals?";

pub const Q1_CAPTION: &str = "\
Distribution of daily rentals on weekends, grouped by weather \
situation (clear, cloudy, rain). Poor weather visibly compresses the \
rental distribution; clear and cloudy days support far higher volumes.";

pub const Q2_HEADING: &str =
    "2. How does summer rental growth compare with the other seasons?";

pub const Q2_CAPTION: &str = "\
Daily rental counts over time, one series per season. Rentals climb \
from spring into a summer peak and fall away sharply through winter.";

pub const Q3_HEADING: &str =
    "3. How do casual and registered users differ on workdays?";

pub const Q3_CAPTION: &str = "\
Workday rental distributions for casual versus registered users. \
Registered users dominate workday traffic, consistent with commuting \
as the primary use.";

pub const CONCLUSION: &str = "\
## Conclusions

- Weather has a pronounced effect on rentals: stormy days pull daily \
volumes down to a fraction of what clear or cloudy days support.
- Rentals grow from March toward a June-August peak and drop sharply \
once winter sets in, so warm weather is the strongest seasonal driver.
- Registered users are the core of the service and dominate workday \
usage, while casual riders are more seasonal and weekend-oriented.";
