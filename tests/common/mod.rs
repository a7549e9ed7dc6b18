//! Common test utilities

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Small tweet archive covering several years, with a few broken rows
pub const SAMPLE_TWEETS_CSV: &str = r#"Date,Text,Retweets
2009-05-04 13:54:25,"Be sure to tune in and watch Donald Trump on Late Night with David Letterman!",500
2011-04-27 09:00:00,"Obama should release his records. Why won't he?",120
2011-04-28 10:30:00,"OBAMA is a disaster for China policy",98
not a date,"This row has a broken date",3
2013-10-01 08:15:00,"Obamacare is a terrible, terrible failure. Sad!",410
2015-06-16 15:00:00,"Make America Great Again! We will beat China and Mexico.",9000
2016-11-08 23:00:00,,1
2017-01-11 12:00:00,"FAKE NEWS - a total political witch hunt!",2000
2017-02-16 18:45:00,"The fake news media is going crazy. Russia is fake news. Great day, sad media!",1500
"#;

/// Country list in the `"CC Name"` layout with a header
pub const SAMPLE_COUNTRIES: &str = "Country\nCN China\nMX Mexico\nRU Russia\nFR France\nUS US\n";

/// Temporary directory holding the sample files
pub struct Fixture {
    pub dir: TempDir,
    pub tweets: PathBuf,
    pub countries: PathBuf,
}

/// Write the sample files into a fresh temporary directory
pub fn fixture() -> Fixture {
    let dir = TempDir::new().unwrap();
    let tweets = dir.path().join("tweets.csv");
    let countries = dir.path().join("country_names.txt");
    fs::write(&tweets, SAMPLE_TWEETS_CSV).unwrap();
    fs::write(&countries, SAMPLE_COUNTRIES).unwrap();

    Fixture {
        dir,
        tweets,
        countries,
    }
}
