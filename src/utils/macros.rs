#[macro_export]
macro_rules! iter_const {
    ( for $t:ident in $start:expr ,.. $end:expr => $bl:block ) => {{
        let mut $t = $start;
        if $start < $end {
            loop {
                $bl;

                $t += 1;
                if $t >= $end {
                    break;
                }
            }
        }
    }};
}

#[macro_export]
macro_rules! time_stamp {
    ( $hour:literal : $minute:literal ) => {{
        static_assertions::const_assert!($hour < 24);
        static_assertions::const_assert!($minute < 60);

        $crate::time::TimeStamp::new_const($hour, $minute)
    }};
}

#[macro_export]
macro_rules! working_duration {
    ( $hours:literal : $mins:literal ) => {{
        static_assertions::const_assert!($hours < 100);
        static_assertions::const_assert!($mins < 60);

        $crate::time::WorkingDuration::new_const($hours, $mins)
    }};
}
