// 📚 Built-in category table
//
// One row per aggregator category code, in code order.
// Columns: code, physical location, kind, short label, detailed label.

use super::{entry, TableEntry};
use crate::kind::TransactionKind::{Charge, Payment};

pub static BUILTIN_ENTRIES: &[TableEntry] = &[
    entry("10000000", false, Charge, "bank fees", "bank fees"),
    entry("10001000", false, Charge, "bank fees", "bank fees=>overdraft"),
    entry("10002000", false, Charge, "bank fees", "bank fees=>atm"),
    entry("10003000", false, Charge, "bank fees", "bank fees=>late payment"),
    entry("10004000", false, Charge, "bank fees", "bank fees=>fraud dispute"),
    entry("10005000", false, Charge, "bank fees", "bank fees=>foreign transaction"),
    entry("10006000", false, Charge, "bank fees", "bank fees=>wire transfer"),
    entry("10007000", false, Charge, "bank fees", "bank fees=>insufficient funds"),
    entry("10008000", false, Charge, "bank fees", "bank fees=>cash advance"),
    entry("10009000", false, Charge, "bank fees", "bank fees=>excess activity"),
    entry("11000000", false, Charge, "cash advance", "cash advance"),
    entry("12000000", true, Charge, "community", "community"),
    entry("12001000", true, Charge, "community", "community=>animal shelter"),
    entry("12002000", true, Charge, "community", "community=>assisted living services"),
    entry("12002001", true, Charge, "community", "community=>assisted living services=>facilities and nursing homes"),
    entry("12002002", true, Charge, "community", "community=>assisted living services=>caretakers"),
    entry("12003000", true, Charge, "community", "community=>cemetery"),
    entry("12004000", true, Charge, "community", "community=>courts"),
    entry("12005000", true, Charge, "community", "community=>day care and preschools"),
    entry("12006000", true, Charge, "community", "community=>disabled persons services"),
    entry("12007000", true, Charge, "community", "community=>drug and alcohol services"),
    entry("12008000", true, Charge, "community", "community=>education"),
    entry("12008001", true, Charge, "community", "community=>education=>vocational schools"),
    entry("12008002", true, Charge, "community", "community=>education=>tutoring and educational services"),
    entry("12008003", true, Charge, "community", "community=>education=>primary and secondary schools"),
    entry("12008004", true, Charge, "community", "community=>education=>fraternities and sororities"),
    entry("12008005", true, Charge, "community", "community=>education=>driving schools"),
    entry("12008006", true, Charge, "community", "community=>education=>dance schools"),
    entry("12008007", true, Charge, "community", "community=>education=>culinary lessons and schools"),
    entry("12008008", true, Charge, "community", "community=>education=>computer training"),
    entry("12008009", true, Charge, "community", "community=>education=>colleges and universities"),
    entry("12008010", true, Charge, "community", "community=>education=>art school"),
    entry("12008011", true, Charge, "community", "community=>education=>adult education"),
    entry("12009000", true, Charge, "community", "community=>government departments and agencies"),
    entry("12010000", true, Charge, "community", "community=>government lobbyists"),
    entry("12011000", true, Charge, "community", "community=>housing assistance and shelters"),
    entry("12012000", true, Charge, "community", "community=>law enforcement"),
    entry("12012001", true, Charge, "community", "community=>law enforcement=>police stations"),
    entry("12012002", true, Charge, "community", "community=>law enforcement=>fire stations"),
    entry("12012003", true, Charge, "community", "community=>law enforcement=>correctional institutions"),
    entry("12013000", true, Charge, "community", "community=>libraries"),
    entry("12014000", true, Charge, "community", "community=>military"),
    entry("12015000", true, Charge, "community", "community=>organizations and associations"),
    entry("12015001", true, Charge, "community", "community=>organizations and associations=>youth organizations"),
    entry("12015002", true, Charge, "community", "community=>organizations and associations=>environmental"),
    entry("12015003", true, Charge, "community", "community=>organizations and associations=>charities and non-profits"),
    entry("12016000", true, Charge, "community", "community=>post offices"),
    entry("12017000", true, Charge, "community", "community=>public and social services"),
    entry("12018000", true, Charge, "community", "community=>religious"),
    entry("12018001", true, Charge, "community", "community=>religious=>temple"),
    entry("12018002", true, Charge, "community", "community=>religious=>synagogues"),
    entry("12018003", true, Charge, "community", "community=>religious=>mosques"),
    entry("12018004", true, Charge, "community", "community=>religious=>churches"),
    entry("12019000", true, Charge, "community", "community=>senior citizen services"),
    entry("12019001", true, Charge, "community", "community=>senior citizen services=>retirement"),
    entry("13000000", true, Charge, "food and drink", "food and drink"),
    entry("13001000", true, Charge, "food and drink", "food and drink=>bar"),
    entry("13001001", true, Charge, "food and drink", "food and drink=>bar=>wine bar"),
    entry("13001002", true, Charge, "food and drink", "food and drink=>bar=>sports bar"),
    entry("13001003", true, Charge, "food and drink", "food and drink=>bar=>hotel lounge"),
    entry("13002000", true, Charge, "food and drink", "food and drink=>breweries"),
    entry("13003000", true, Charge, "food and drink", "food and drink=>internet cafes"),
    entry("13004000", true, Charge, "food and drink", "food and drink=>nightlife"),
    entry("13004001", true, Charge, "food and drink", "food and drink=>nightlife=>strip club"),
    entry("13004002", true, Charge, "food and drink", "food and drink=>nightlife=>night clubs"),
    entry("13004003", true, Charge, "food and drink", "food and drink=>nightlife=>karaoke"),
    entry("13004004", true, Charge, "food and drink", "food and drink=>nightlife=>jazz and blues cafe"),
    entry("13004005", true, Charge, "food and drink", "food and drink=>nightlife=>hookah lounges"),
    entry("13004006", true, Charge, "food and drink", "food and drink=>nightlife=>adult entertainment"),
    entry("13005000", true, Charge, "food and drink", "food and drink=>restaurants"),
    entry("13005001", true, Charge, "food and drink", "food and drink=>restaurants=>winery"),
    entry("13005002", true, Charge, "food and drink", "food and drink=>restaurants=>vegan and vegetarian"),
    entry("13005003", true, Charge, "food and drink", "food and drink=>restaurants=>turkish"),
    entry("13005004", true, Charge, "food and drink", "food and drink=>restaurants=>thai"),
    entry("13005005", true, Charge, "food and drink", "food and drink=>restaurants=>swiss"),
    entry("13005006", true, Charge, "food and drink", "food and drink=>restaurants=>sushi"),
    entry("13005007", true, Charge, "food and drink", "food and drink=>restaurants=>steakhouses"),
    entry("13005008", true, Charge, "food and drink", "food and drink=>restaurants=>spanish"),
    entry("13005009", true, Charge, "food and drink", "food and drink=>restaurants=>seafood"),
    entry("13005010", true, Charge, "food and drink", "food and drink=>restaurants=>scandinavian"),
    entry("13005011", true, Charge, "food and drink", "food and drink=>restaurants=>portuguese"),
    entry("13005012", true, Charge, "food and drink", "food and drink=>restaurants=>pizza"),
    entry("13005013", true, Charge, "food and drink", "food and drink=>restaurants=>moroccan"),
    entry("13005014", true, Charge, "food and drink", "food and drink=>restaurants=>middle eastern"),
    entry("13005015", true, Charge, "food and drink", "food and drink=>restaurants=>mexican"),
    entry("13005016", true, Charge, "food and drink", "food and drink=>restaurants=>mediterranean"),
    entry("13005017", true, Charge, "food and drink", "food and drink=>restaurants=>latin american"),
    entry("13005018", true, Charge, "food and drink", "food and drink=>restaurants=>korean"),
    entry("13005019", true, Charge, "food and drink", "food and drink=>restaurants=>juice bar"),
    entry("13005020", true, Charge, "food and drink", "food and drink=>restaurants=>japanese"),
    entry("13005021", true, Charge, "food and drink", "food and drink=>restaurants=>italian"),
    entry("13005022", true, Charge, "food and drink", "food and drink=>restaurants=>indonesian"),
    entry("13005023", true, Charge, "food and drink", "food and drink=>restaurants=>indian"),
    entry("13005024", true, Charge, "food and drink", "food and drink=>restaurants=>ice cream"),
    entry("13005025", true, Charge, "food and drink", "food and drink=>restaurants=>greek"),
    entry("13005026", true, Charge, "food and drink", "food and drink=>restaurants=>german"),
    entry("13005027", true, Charge, "food and drink", "food and drink=>restaurants=>gastropub"),
    entry("13005028", true, Charge, "food and drink", "food and drink=>restaurants=>french"),
    entry("13005029", true, Charge, "food and drink", "food and drink=>restaurants=>food truck"),
    entry("13005030", true, Charge, "food and drink", "food and drink=>restaurants=>fish and chips"),
    entry("13005031", true, Charge, "food and drink", "food and drink=>restaurants=>filipino"),
    entry("13005032", true, Charge, "food and drink", "food and drink=>restaurants=>fast food"),
    entry("13005033", true, Charge, "food and drink", "food and drink=>restaurants=>falafel"),
    entry("13005034", true, Charge, "food and drink", "food and drink=>restaurants=>ethiopian"),
    entry("13005035", true, Charge, "food and drink", "food and drink=>restaurants=>eastern european"),
    entry("13005036", true, Charge, "food and drink", "food and drink=>restaurants=>donuts"),
    entry("13005037", true, Charge, "food and drink", "food and drink=>restaurants=>distillery"),
    entry("13005038", true, Charge, "food and drink", "food and drink=>restaurants=>diners"),
    entry("13005039", true, Charge, "food and drink", "food and drink=>restaurants=>dessert"),
    entry("13005040", true, Charge, "food and drink", "food and drink=>restaurants=>delis"),
    entry("13005041", true, Charge, "food and drink", "food and drink=>restaurants=>cupcake shop"),
    entry("13005042", true, Charge, "food and drink", "food and drink=>restaurants=>cuban"),
    entry("13005043", true, Charge, "food and drink", "food and drink=>restaurants=>coffee shop"),
    entry("13005044", true, Charge, "food and drink", "food and drink=>restaurants=>chinese"),
    entry("13005045", true, Charge, "food and drink", "food and drink=>restaurants=>caribbean"),
    entry("13005046", true, Charge, "food and drink", "food and drink=>restaurants=>cajun"),
    entry("13005047", true, Charge, "food and drink", "food and drink=>restaurants=>cafe"),
    entry("13005048", true, Charge, "food and drink", "food and drink=>restaurants=>burrito"),
    entry("13005049", true, Charge, "food and drink", "food and drink=>restaurants=>burgers"),
    entry("13005050", true, Charge, "food and drink", "food and drink=>restaurants=>breakfast spot"),
    entry("13005051", true, Charge, "food and drink", "food and drink=>restaurants=>brazilian"),
    entry("13005052", true, Charge, "food and drink", "food and drink=>restaurants=>barbecue"),
    entry("13005053", true, Charge, "food and drink", "food and drink=>restaurants=>bakery"),
    entry("13005054", true, Charge, "food and drink", "food and drink=>restaurants=>bagel shop"),
    entry("13005055", true, Charge, "food and drink", "food and drink=>restaurants=>australian"),
    entry("13005056", true, Charge, "food and drink", "food and drink=>restaurants=>asian"),
    entry("13005057", true, Charge, "food and drink", "food and drink=>restaurants=>american"),
    entry("13005058", true, Charge, "food and drink", "food and drink=>restaurants=>african"),
    entry("13005059", true, Charge, "food and drink", "food and drink=>restaurants=>afghan"),
    entry("14000000", true, Charge, "healthcare", "healthcare"),
    entry("14001000", true, Charge, "healthcare", "healthcare=>healthcare services"),
    entry("14001001", true, Charge, "healthcare", "healthcare=>healthcare services=>psychologists"),
    entry("14001002", true, Charge, "healthcare", "healthcare=>healthcare services=>pregnancy and sexual health"),
    entry("14001003", true, Charge, "healthcare", "healthcare=>healthcare services=>podiatrists"),
    entry("14001004", true, Charge, "healthcare", "healthcare=>healthcare services=>physical therapy"),
    entry("14001005", true, Charge, "healthcare", "healthcare=>healthcare services=>optometrists"),
    entry("14001006", true, Charge, "healthcare", "healthcare=>healthcare services=>nutritionists"),
    entry("14001007", true, Charge, "healthcare", "healthcare=>healthcare services=>nurses"),
    entry("14001008", true, Charge, "healthcare", "healthcare=>healthcare services=>mental health"),
    entry("14001009", true, Charge, "healthcare", "healthcare=>healthcare services=>medical supplies and labs"),
    entry("14001010", true, Charge, "healthcare", "healthcare=>healthcare services=>hospitals, clinics and medical centers"),
    entry("14001011", true, Charge, "healthcare", "healthcare=>healthcare services=>emergency services"),
    entry("14001012", true, Charge, "healthcare", "healthcare=>healthcare services=>dentists"),
    entry("14001013", true, Charge, "healthcare", "healthcare=>healthcare services=>counseling and therapy"),
    entry("14001014", true, Charge, "healthcare", "healthcare=>healthcare services=>chiropractors"),
    entry("14001015", true, Charge, "healthcare", "healthcare=>healthcare services=>blood banks and centers"),
    entry("14001016", true, Charge, "healthcare", "healthcare=>healthcare services=>alternative medicine"),
    entry("14001017", true, Charge, "healthcare", "healthcare=>healthcare services=>acupuncture"),
    entry("14002000", true, Charge, "healthcare", "healthcare=>physicians"),
    entry("14002001", true, Charge, "healthcare", "healthcare=>physicians=>urologists"),
    entry("14002002", true, Charge, "healthcare", "healthcare=>physicians=>respiratory"),
    entry("14002003", true, Charge, "healthcare", "healthcare=>physicians=>radiologists"),
    entry("14002004", true, Charge, "healthcare", "healthcare=>physicians=>psychiatrists"),
    entry("14002005", true, Charge, "healthcare", "healthcare=>physicians=>plastic surgeons"),
    entry("14002006", true, Charge, "healthcare", "healthcare=>physicians=>pediatricians"),
    entry("14002007", true, Charge, "healthcare", "healthcare=>physicians=>pathologists"),
    entry("14002008", true, Charge, "healthcare", "healthcare=>physicians=>orthopedic surgeons"),
    entry("14002009", true, Charge, "healthcare", "healthcare=>physicians=>ophthalmologists"),
    entry("14002010", true, Charge, "healthcare", "healthcare=>physicians=>oncologists"),
    entry("14002011", true, Charge, "healthcare", "healthcare=>physicians=>obstetricians and gynecologists"),
    entry("14002012", true, Charge, "healthcare", "healthcare=>physicians=>neurologists"),
    entry("14002013", true, Charge, "healthcare", "healthcare=>physicians=>internal medicine"),
    entry("14002014", true, Charge, "healthcare", "healthcare=>physicians=>general surgery"),
    entry("14002015", true, Charge, "healthcare", "healthcare=>physicians=>gastroenterologists"),
    entry("14002016", true, Charge, "healthcare", "healthcare=>physicians=>family medicine"),
    entry("14002017", true, Charge, "healthcare", "healthcare=>physicians=>ear, nose and throat"),
    entry("14002018", true, Charge, "healthcare", "healthcare=>physicians=>dermatologists"),
    entry("14002019", true, Charge, "healthcare", "healthcare=>physicians=>cardiologists"),
    entry("14002020", true, Charge, "healthcare", "healthcare=>physicians=>anesthesiologists"),
    entry("15000000", false, Charge, "interest", "interest"),
    entry("15001000", false, Charge, "interest", "interest=>interest earned"),
    entry("15002000", false, Charge, "interest", "interest=>interest charged"),
    entry("16000000", false, Payment, "payment", "payment"),
    entry("16001000", false, Payment, "payment", "payment=>credit card"),
    entry("16002000", false, Payment, "payment", "payment=>rent"),
    entry("16003000", false, Payment, "payment", "payment=>loan"),
    entry("17000000", true, Charge, "recreation", "recreation"),
    entry("17001000", true, Charge, "recreation", "recreation=>arts and entertainment"),
    entry("17001001", true, Charge, "recreation", "recreation=>arts and entertainment=>theatrical productions"),
    entry("17001002", true, Charge, "recreation", "recreation=>arts and entertainment=>symphony and opera"),
    entry("17001003", true, Charge, "recreation", "recreation=>arts and entertainment=>sports venues"),
    entry("17001004", true, Charge, "recreation", "recreation=>arts and entertainment=>social clubs"),
    entry("17001005", true, Charge, "recreation", "recreation=>arts and entertainment=>psychics and astrologers"),
    entry("17001006", true, Charge, "recreation", "recreation=>arts and entertainment=>party centers"),
    entry("17001007", true, Charge, "recreation", "recreation=>arts and entertainment=>music and show venues"),
    entry("17001008", true, Charge, "recreation", "recreation=>arts and entertainment=>museums"),
    entry("17001009", true, Charge, "recreation", "recreation=>arts and entertainment=>movie theatres"),
    entry("17001010", true, Charge, "recreation", "recreation=>arts and entertainment=>fairgrounds and rodeos"),
    entry("17001011", true, Charge, "recreation", "recreation=>arts and entertainment=>entertainment"),
    entry("17001012", true, Charge, "recreation", "recreation=>arts and entertainment=>dance halls and saloons"),
    entry("17001013", true, Charge, "recreation", "recreation=>arts and entertainment=>circuses and carnivals"),
    entry("17001014", true, Charge, "recreation", "recreation=>arts and entertainment=>casinos and gaming"),
    entry("17001015", true, Charge, "recreation", "recreation=>arts and entertainment=>bowling"),
    entry("17001016", true, Charge, "recreation", "recreation=>arts and entertainment=>billiards and pool"),
    entry("17001017", true, Charge, "recreation", "recreation=>arts and entertainment=>art dealers and galleries"),
    entry("17001018", true, Charge, "recreation", "recreation=>arts and entertainment=>arcades and amusement parks"),
    entry("17001019", true, Charge, "recreation", "recreation=>arts and entertainment=>aquarium"),
    entry("17002000", true, Charge, "recreation", "recreation=>athletic fields"),
    entry("17003000", true, Charge, "recreation", "recreation=>baseball"),
    entry("17004000", true, Charge, "recreation", "recreation=>basketball"),
    entry("17005000", true, Charge, "recreation", "recreation=>batting cages"),
    entry("17006000", true, Charge, "recreation", "recreation=>boating"),
    entry("17007000", true, Charge, "recreation", "recreation=>campgrounds and rv parks"),
    entry("17008000", true, Charge, "recreation", "recreation=>canoes and kayaks"),
    entry("17009000", true, Charge, "recreation", "recreation=>combat sports"),
    entry("17010000", true, Charge, "recreation", "recreation=>cycling"),
    entry("17011000", true, Charge, "recreation", "recreation=>dance"),
    entry("17012000", true, Charge, "recreation", "recreation=>equestrian"),
    entry("17013000", true, Charge, "recreation", "recreation=>football"),
    entry("17014000", true, Charge, "recreation", "recreation=>go carts"),
    entry("17015000", true, Charge, "recreation", "recreation=>golf"),
    entry("17016000", true, Charge, "recreation", "recreation=>gun ranges"),
    entry("17017000", true, Charge, "recreation", "recreation=>gymnastics"),
    entry("17018000", true, Charge, "recreation", "recreation=>gyms and fitness centers"),
    entry("17019000", true, Charge, "recreation", "recreation=>hiking"),
    entry("17020000", true, Charge, "recreation", "recreation=>hockey"),
    entry("17021000", true, Charge, "recreation", "recreation=>hot air balloons"),
    entry("17022000", true, Charge, "recreation", "recreation=>hunting and fishing"),
    entry("17023000", true, Charge, "recreation", "recreation=>landmarks"),
    entry("17023001", true, Charge, "recreation", "recreation=>landmarks=>monuments and memorials"),
    entry("17023002", true, Charge, "recreation", "recreation=>landmarks=>historic sites"),
    entry("17023003", true, Charge, "recreation", "recreation=>landmarks=>gardens"),
    entry("17023004", true, Charge, "recreation", "recreation=>landmarks=>buildings and structures"),
    entry("17024000", true, Charge, "recreation", "recreation=>miniature golf"),
    entry("17025000", true, Charge, "recreation", "recreation=>outdoors"),
    entry("17025001", true, Charge, "recreation", "recreation=>outdoors=>rivers"),
    entry("17025002", true, Charge, "recreation", "recreation=>outdoors=>mountains"),
    entry("17025003", true, Charge, "recreation", "recreation=>outdoors=>lakes"),
    entry("17025004", true, Charge, "recreation", "recreation=>outdoors=>forests"),
    entry("17025005", true, Charge, "recreation", "recreation=>outdoors=>beaches"),
    entry("17026000", true, Charge, "recreation", "recreation=>paintball"),
    entry("17027000", true, Charge, "recreation", "recreation=>parks"),
    entry("17027001", true, Charge, "recreation", "recreation=>parks=>playgrounds"),
    entry("17027002", true, Charge, "recreation", "recreation=>parks=>picnic areas"),
    entry("17027003", true, Charge, "recreation", "recreation=>parks=>natural parks"),
    entry("17028000", true, Charge, "recreation", "recreation=>personal trainers"),
    entry("17029000", true, Charge, "recreation", "recreation=>race tracks"),
    entry("17030000", true, Charge, "recreation", "recreation=>racquet sports"),
    entry("17031000", true, Charge, "recreation", "recreation=>racquetball"),
    entry("17032000", true, Charge, "recreation", "recreation=>rafting"),
    entry("17033000", true, Charge, "recreation", "recreation=>recreation centers"),
    entry("17034000", true, Charge, "recreation", "recreation=>rock climbing"),
    entry("17035000", true, Charge, "recreation", "recreation=>running"),
    entry("17036000", true, Charge, "recreation", "recreation=>scuba diving"),
    entry("17037000", true, Charge, "recreation", "recreation=>skating"),
    entry("17038000", true, Charge, "recreation", "recreation=>skydiving"),
    entry("17039000", true, Charge, "recreation", "recreation=>snow sports"),
    entry("17040000", true, Charge, "recreation", "recreation=>soccer"),
    entry("17041000", true, Charge, "recreation", "recreation=>sports and recreation camps"),
    entry("17042000", true, Charge, "recreation", "recreation=>sports clubs"),
    entry("17043000", true, Charge, "recreation", "recreation=>stadiums and arenas"),
    entry("17044000", true, Charge, "recreation", "recreation=>swimming"),
    entry("17045000", true, Charge, "recreation", "recreation=>tennis"),
    entry("17046000", true, Charge, "recreation", "recreation=>water sports"),
    entry("17047000", true, Charge, "recreation", "recreation=>yoga and pilates"),
    entry("17048000", true, Charge, "recreation", "recreation=>zoo"),
    entry("18000000", true, Charge, "service", "service"),
    entry("18001000", true, Charge, "service", "service=>advertising and marketing"),
    entry("18001001", true, Charge, "service", "service=>advertising and marketing=>writing, copywriting and technical writing"),
    entry("18001002", true, Charge, "service", "service=>advertising and marketing=>search engine marketing and optimization"),
    entry("18001003", true, Charge, "service", "service=>advertising and marketing=>public relations"),
    entry("18001004", true, Charge, "service", "service=>advertising and marketing=>promotional items"),
    entry("18001005", true, Charge, "service", "service=>advertising and marketing=>print, tv, radio and outdoor advertising"),
    entry("18001006", true, Charge, "service", "service=>advertising and marketing=>online advertising"),
    entry("18001007", true, Charge, "service", "service=>advertising and marketing=>market research and consulting"),
    entry("18001008", true, Charge, "service", "service=>advertising and marketing=>direct mail and email marketing services"),
    entry("18001009", true, Charge, "service", "service=>advertising and marketing=>creative services"),
    entry("18001010", true, Charge, "service", "service=>advertising and marketing=>advertising agencies and media buyers"),
    entry("18003000", true, Charge, "service", "service=>art restoration"),
    entry("18004000", true, Charge, "service", "service=>audiovisual"),
    entry("18005000", true, Charge, "service", "service=>automation and control systems"),
    entry("18006000", true, Charge, "service", "service=>automotive"),
    entry("18006001", true, Charge, "service", "service=>automotive=>towing"),
    entry("18006002", true, Charge, "service", "service=>automotive=>motorcycle, moped and scooter repair"),
    entry("18006003", true, Charge, "service", "service=>automotive=>maintenance and repair"),
    entry("18006004", true, Charge, "service", "service=>automotive=>car wash and detail"),
    entry("18006005", true, Charge, "service", "service=>automotive=>car appraisers"),
    entry("18006006", true, Charge, "service", "service=>automotive=>auto transmission"),
    entry("18006007", true, Charge, "service", "service=>automotive=>auto tires"),
    entry("18006008", true, Charge, "service", "service=>automotive=>auto smog check"),
    entry("18006009", true, Charge, "service", "service=>automotive=>auto oil and lube"),
    entry("18007000", true, Charge, "service", "service=>business and strategy consulting"),
    entry("18008000", true, Charge, "service", "service=>business services"),
    entry("18008001", true, Charge, "service", "service=>business services=>printing and publishing"),
    entry("18009000", false, Charge, "service", "service=>cable"),
    entry("18010000", true, Charge, "service", "service=>chemicals and gasses"),
    entry("18011000", true, Charge, "service", "service=>cleaning"),
    entry("18012000", true, Charge, "service", "service=>computers"),
    entry("18012001", true, Charge, "service", "service=>computers=>maintenance and repair"),
    entry("18012002", true, Charge, "service", "service=>computers=>software development"),
    entry("18013000", true, Charge, "service", "service=>construction"),
    entry("18013001", true, Charge, "service", "service=>construction=>specialty"),
    entry("18013002", true, Charge, "service", "service=>construction=>roofers"),
    entry("18013003", true, Charge, "service", "service=>construction=>painting"),
    entry("18013004", true, Charge, "service", "service=>construction=>masonry"),
    entry("18013005", true, Charge, "service", "service=>construction=>infrastructure"),
    entry("18013006", true, Charge, "service", "service=>construction=>heating, ventilating and air conditioning"),
    entry("18013007", true, Charge, "service", "service=>construction=>electricians"),
    entry("18013008", true, Charge, "service", "service=>construction=>contractors"),
    entry("18013009", true, Charge, "service", "service=>construction=>carpet and flooring"),
    entry("18013010", true, Charge, "service", "service=>construction=>carpenters"),
    entry("18014000", true, Charge, "service", "service=>credit counseling and bankruptcy services"),
    entry("18015000", true, Charge, "service", "service=>dating and escort"),
    entry("18016000", true, Charge, "service", "service=>employment agencies"),
    entry("18017000", true, Charge, "service", "service=>engineering"),
    entry("18018000", true, Charge, "service", "service=>entertainment"),
    entry("18018001", true, Charge, "service", "service=>entertainment=>media"),
    entry("18019000", true, Charge, "service", "service=>events and event planning"),
    entry("18020000", true, Charge, "service", "service=>financial"),
    entry("18020001", true, Charge, "service", "service=>financial=>taxes"),
    entry("18020002", true, Charge, "service", "service=>financial=>student aid and grants"),
    entry("18020003", true, Charge, "service", "service=>financial=>stock brokers"),
    entry("18020004", true, Charge, "service", "service=>financial=>loans and mortgages"),
    entry("18020005", true, Charge, "service", "service=>financial=>holding and investment offices"),
    entry("18020006", true, Charge, "service", "service=>financial=>fund raising"),
    entry("18020007", true, Charge, "service", "service=>financial=>financial planning and investments"),
    entry("18020008", true, Charge, "service", "service=>financial=>credit reporting"),
    entry("18020009", true, Charge, "service", "service=>financial=>collections"),
    entry("18020010", true, Charge, "service", "service=>financial=>check cashing"),
    entry("18020011", true, Charge, "service", "service=>financial=>business brokers and franchises"),
    entry("18020012", true, Charge, "service", "service=>financial=>banking and finance"),
    entry("18020013", true, Charge, "service", "service=>financial=>atms"),
    entry("18020014", true, Charge, "service", "service=>financial=>accounting and bookkeeping"),
    entry("18021000", true, Charge, "service", "service=>food and beverage"),
    entry("18021001", true, Charge, "service", "service=>food and beverage=>distribution"),
    entry("18021002", true, Charge, "service", "service=>food and beverage=>catering"),
    entry("18022000", true, Charge, "service", "service=>funeral services"),
    entry("18023000", true, Charge, "service", "service=>geological"),
    entry("18024000", true, Charge, "service", "service=>home improvement"),
    entry("18024001", true, Charge, "service", "service=>home improvement=>upholstery"),
    entry("18024002", true, Charge, "service", "service=>home improvement=>tree service"),
    entry("18024003", true, Charge, "service", "service=>home improvement=>swimming pool maintenance and services"),
    entry("18024004", true, Charge, "service", "service=>home improvement=>storage"),
    entry("18024005", true, Charge, "service", "service=>home improvement=>roofers"),
    entry("18024006", true, Charge, "service", "service=>home improvement=>pools and spas"),
    entry("18024007", true, Charge, "service", "service=>home improvement=>plumbing"),
    entry("18024008", true, Charge, "service", "service=>home improvement=>pest control"),
    entry("18024009", true, Charge, "service", "service=>home improvement=>painting"),
    entry("18024010", true, Charge, "service", "service=>home improvement=>movers"),
    entry("18024011", true, Charge, "service", "service=>home improvement=>mobile homes"),
    entry("18024012", true, Charge, "service", "service=>home improvement=>lighting fixtures"),
    entry("18024013", true, Charge, "service", "service=>home improvement=>landscaping and gardeners"),
    entry("18024014", true, Charge, "service", "service=>home improvement=>kitchens"),
    entry("18024015", true, Charge, "service", "service=>home improvement=>interior design"),
    entry("18024016", true, Charge, "service", "service=>home improvement=>housewares"),
    entry("18024017", true, Charge, "service", "service=>home improvement=>home inspection services"),
    entry("18024018", true, Charge, "service", "service=>home improvement=>home appliances"),
    entry("18024019", true, Charge, "service", "service=>home improvement=>heating, ventilation and air conditioning"),
    entry("18024020", true, Charge, "service", "service=>home improvement=>hardware and services"),
    entry("18024021", true, Charge, "service", "service=>home improvement=>fences, fireplaces and garage doors"),
    entry("18024022", true, Charge, "service", "service=>home improvement=>electricians"),
    entry("18024023", true, Charge, "service", "service=>home improvement=>doors and windows"),
    entry("18024024", true, Charge, "service", "service=>home improvement=>contractors"),
    entry("18024025", true, Charge, "service", "service=>home improvement=>carpet and flooring"),
    entry("18024026", true, Charge, "service", "service=>home improvement=>carpenters"),
    entry("18024027", true, Charge, "service", "service=>home improvement=>architects"),
    entry("18025000", true, Charge, "service", "service=>household"),
    entry("18026000", true, Charge, "service", "service=>human resources"),
    entry("18027000", true, Charge, "service", "service=>immigration"),
    entry("18028000", true, Charge, "service", "service=>import and export"),
    entry("18029000", true, Charge, "service", "service=>industrial machinery and vehicles"),
    entry("18030000", false, Charge, "service", "service=>insurance"),
    entry("18031000", false, Charge, "service", "service=>internet services"),
    entry("18032000", true, Charge, "service", "service=>leather"),
    entry("18033000", true, Charge, "service", "service=>legal"),
    entry("18034000", true, Charge, "service", "service=>logging and sawmills"),
    entry("18035000", true, Charge, "service", "service=>machine shops"),
    entry("18036000", true, Charge, "service", "service=>management"),
    entry("18037000", true, Charge, "service", "service=>manufacturing"),
    entry("18037001", true, Charge, "service", "service=>manufacturing=>apparel and fabric products"),
    entry("18037002", true, Charge, "service", "service=>manufacturing=>chemicals and gasses"),
    entry("18037003", true, Charge, "service", "service=>manufacturing=>computers and office machines"),
    entry("18037004", true, Charge, "service", "service=>manufacturing=>electrical equipment and components"),
    entry("18037005", true, Charge, "service", "service=>manufacturing=>food and beverage"),
    entry("18037006", true, Charge, "service", "service=>manufacturing=>furniture and fixtures"),
    entry("18037007", true, Charge, "service", "service=>manufacturing=>glass products"),
    entry("18037008", true, Charge, "service", "service=>manufacturing=>industrial machinery and equipment"),
    entry("18037009", true, Charge, "service", "service=>manufacturing=>leather goods"),
    entry("18037010", true, Charge, "service", "service=>manufacturing=>metal products"),
    entry("18037011", true, Charge, "service", "service=>manufacturing=>nonmetallic mineral products"),
    entry("18037012", true, Charge, "service", "service=>manufacturing=>paper products"),
    entry("18037013", true, Charge, "service", "service=>manufacturing=>petroleum"),
    entry("18037014", true, Charge, "service", "service=>manufacturing=>plastic products"),
    entry("18037015", true, Charge, "service", "service=>manufacturing=>rubber products"),
    entry("18037016", true, Charge, "service", "service=>manufacturing=>service instruments"),
    entry("18037017", true, Charge, "service", "service=>manufacturing=>textiles"),
    entry("18037018", true, Charge, "service", "service=>manufacturing=>tobacco"),
    entry("18037019", true, Charge, "service", "service=>manufacturing=>transportation equipment"),
    entry("18037020", true, Charge, "service", "service=>manufacturing=>wood products"),
    entry("18038000", true, Charge, "service", "service=>media production"),
    entry("18039000", true, Charge, "service", "service=>metals"),
    entry("18040000", true, Charge, "service", "service=>mining"),
    entry("18040001", true, Charge, "service", "service=>mining=>coal"),
    entry("18040002", true, Charge, "service", "service=>mining=>metal"),
    entry("18040003", true, Charge, "service", "service=>mining=>non-metallic minerals"),
    entry("18041000", true, Charge, "service", "service=>news reporting"),
    entry("18042000", true, Charge, "service", "service=>oil and gas"),
    entry("18043000", true, Charge, "service", "service=>packaging"),
    entry("18044000", true, Charge, "service", "service=>paper"),
    entry("18045000", true, Charge, "service", "service=>personal care"),
    entry("18045001", true, Charge, "service", "service=>personal care=>tattooing"),
    entry("18045002", true, Charge, "service", "service=>personal care=>tanning salons"),
    entry("18045003", true, Charge, "service", "service=>personal care=>spas"),
    entry("18045004", true, Charge, "service", "service=>personal care=>skin care"),
    entry("18045005", true, Charge, "service", "service=>personal care=>piercing"),
    entry("18045006", true, Charge, "service", "service=>personal care=>massage clinics and therapists"),
    entry("18045007", true, Charge, "service", "service=>personal care=>manicures and pedicures"),
    entry("18045008", true, Charge, "service", "service=>personal care=>laundry and garment services"),
    entry("18045009", true, Charge, "service", "service=>personal care=>hair salons and barbers"),
    entry("18045010", true, Charge, "service", "service=>personal care=>hair removal"),
    entry("18046000", true, Charge, "service", "service=>petroleum"),
    entry("18047000", true, Charge, "service", "service=>photography"),
    entry("18048000", true, Charge, "service", "service=>plastics"),
    entry("18049000", true, Charge, "service", "service=>rail"),
    entry("18050000", true, Charge, "service", "service=>real estate"),
    entry("18050001", true, Charge, "service", "service=>real estate=>real estate development and title companies"),
    entry("18050002", true, Charge, "service", "service=>real estate=>real estate appraiser"),
    entry("18050003", true, Charge, "service", "service=>real estate=>real estate agents"),
    entry("18050004", true, Charge, "service", "service=>real estate=>property management"),
    entry("18050005", true, Charge, "service", "service=>real estate=>corporate housing"),
    entry("18050006", true, Charge, "service", "service=>real estate=>commercial real estate"),
    entry("18050007", true, Charge, "service", "service=>real estate=>building and land surveyors"),
    entry("18050008", true, Charge, "service", "service=>real estate=>boarding houses"),
    entry("18050009", true, Charge, "service", "service=>real estate=>apartments, condos and houses"),
    entry("18050010", false, Charge, "service", "service=>real estate=>rent"),
    entry("18051000", true, Charge, "service", "service=>refrigeration and ice"),
    entry("18052000", true, Charge, "service", "service=>renewable energy"),
    entry("18053000", true, Charge, "service", "service=>repair services"),
    entry("18054000", true, Charge, "service", "service=>research"),
    entry("18055000", true, Charge, "service", "service=>rubber"),
    entry("18056000", true, Charge, "service", "service=>scientific"),
    entry("18057000", true, Charge, "service", "service=>security and safety"),
    entry("18058000", true, Charge, "service", "service=>shipping and freight"),
    entry("18059000", true, Charge, "service", "service=>software development"),
    entry("18060000", true, Charge, "service", "service=>storage"),
    entry("18061000", true, Charge, "service", "service=>subscription"),
    entry("18062000", true, Charge, "service", "service=>tailors"),
    entry("18063000", true, Charge, "service", "service=>telecommunication services"),
    entry("18064000", true, Charge, "service", "service=>textiles"),
    entry("18065000", true, Charge, "service", "service=>tourist information and services"),
    entry("18066000", true, Charge, "service", "service=>transportation"),
    entry("18067000", true, Charge, "service", "service=>travel agents and tour operators"),
    entry("18068000", false, Charge, "service", "service=>utilities"),
    entry("18068001", false, Charge, "service", "service=>utilities=>water"),
    entry("18068002", false, Charge, "service", "service=>utilities=>sanitary and waste management"),
    entry("18068003", true, Charge, "service", "service=>utilities=>heating, ventilating, and air conditioning"),
    entry("18068004", false, Charge, "service", "service=>utilities=>gas"),
    entry("18068005", false, Charge, "service", "service=>utilities=>electric"),
    entry("18069000", true, Charge, "service", "service=>veterinarians"),
    entry("18070000", true, Charge, "service", "service=>water and waste management"),
    entry("18071000", true, Charge, "service", "service=>web design and development"),
    entry("18072000", true, Charge, "service", "service=>welding"),
    entry("18073000", true, Charge, "service", "service=>agriculture and forestry"),
    entry("18073001", true, Charge, "service", "service=>agriculture and forestry=>crop production"),
    entry("18073002", true, Charge, "service", "service=>agriculture and forestry=>forestry"),
    entry("18073003", true, Charge, "service", "service=>agriculture and forestry=>livestock and animals"),
    entry("18073004", true, Charge, "service", "service=>agriculture and forestry=>services"),
    entry("18074000", true, Charge, "service", "service=>art and graphic design"),
    entry("19000000", true, Charge, "shops", "shops"),
    entry("19001000", true, Charge, "shops", "shops=>adult"),
    entry("19002000", true, Charge, "shops", "shops=>antiques"),
    entry("19003000", true, Charge, "shops", "shops=>arts and crafts"),
    entry("19004000", true, Charge, "shops", "shops=>auctions"),
    entry("19005000", true, Charge, "shops", "shops=>automotive"),
    entry("19005001", true, Charge, "shops", "shops=>automotive=>used car dealers"),
    entry("19005002", true, Charge, "shops", "shops=>automotive=>salvage yards"),
    entry("19005003", true, Charge, "shops", "shops=>automotive=>rvs and motor homes"),
    entry("19005004", true, Charge, "shops", "shops=>automotive=>motorcycles, mopeds and scooters"),
    entry("19005005", true, Charge, "shops", "shops=>automotive=>classic and antique car"),
    entry("19005006", true, Charge, "shops", "shops=>automotive=>car parts and accessories"),
    entry("19005007", true, Charge, "shops", "shops=>automotive=>car dealers and leasing"),
    entry("19006000", true, Charge, "shops", "shops=>beauty products"),
    entry("19007000", true, Charge, "shops", "shops=>bicycles"),
    entry("19008000", true, Charge, "shops", "shops=>boat dealers"),
    entry("19009000", true, Charge, "shops", "shops=>bookstores"),
    entry("19010000", true, Charge, "shops", "shops=>cards and stationery"),
    entry("19011000", true, Charge, "shops", "shops=>children"),
    entry("19012000", true, Charge, "shops", "shops=>clothing and accessories"),
    entry("19012001", true, Charge, "shops", "shops=>clothing and accessories=>women's store"),
    entry("19012002", true, Charge, "shops", "shops=>clothing and accessories=>swimwear"),
    entry("19012003", true, Charge, "shops", "shops=>clothing and accessories=>shoe store"),
    entry("19012004", true, Charge, "shops", "shops=>clothing and accessories=>men's store"),
    entry("19012005", true, Charge, "shops", "shops=>clothing and accessories=>lingerie store"),
    entry("19012006", true, Charge, "shops", "shops=>clothing and accessories=>kids' store"),
    entry("19012007", true, Charge, "shops", "shops=>clothing and accessories=>boutique"),
    entry("19012008", true, Charge, "shops", "shops=>clothing and accessories=>accessories store"),
    entry("19013000", true, Charge, "shops", "shops=>computers and electronics"),
    entry("19013001", true, Charge, "shops", "shops=>computers and electronics=>video games"),
    entry("19013002", true, Charge, "shops", "shops=>computers and electronics=>mobile phones"),
    entry("19013003", true, Charge, "shops", "shops=>computers and electronics=>cameras"),
    entry("19014000", true, Charge, "shops", "shops=>construction supplies"),
    entry("19015000", true, Charge, "shops", "shops=>convenience stores"),
    entry("19016000", true, Charge, "shops", "shops=>costumes"),
    entry("19017000", true, Charge, "shops", "shops=>dance and music"),
    entry("19018000", true, Charge, "shops", "shops=>department stores"),
    entry("19019000", false, Charge, "shops", "shops=>digital purchase"),
    entry("19020000", true, Charge, "shops", "shops=>discount stores"),
    entry("19021000", true, Charge, "shops", "shops=>electrical equipment"),
    entry("19022000", true, Charge, "shops", "shops=>equipment rental"),
    entry("19023000", true, Charge, "shops", "shops=>flea markets"),
    entry("19024000", true, Charge, "shops", "shops=>florists"),
    entry("19025000", true, Charge, "shops", "shops=>food and beverage store"),
    entry("19025001", true, Charge, "shops", "shops=>food and beverage store=>specialty"),
    entry("19025002", true, Charge, "shops", "shops=>food and beverage store=>health food"),
    entry("19025003", true, Charge, "shops", "shops=>food and beverage store=>farmers markets"),
    entry("19025004", true, Charge, "shops", "shops=>food and beverage store=>beer, wine and spirits"),
    entry("19026000", true, Charge, "shops", "shops=>fuel dealer"),
    entry("19027000", true, Charge, "shops", "shops=>furniture and home decor"),
    entry("19028000", true, Charge, "shops", "shops=>gift and novelty"),
    entry("19029000", true, Charge, "shops", "shops=>glasses and optometrist"),
    entry("19030000", true, Charge, "shops", "shops=>hardware store"),
    entry("19031000", true, Charge, "shops", "shops=>hobby and collectibles"),
    entry("19032000", true, Charge, "shops", "shops=>industrial supplies"),
    entry("19033000", true, Charge, "shops", "shops=>jewelry and watches"),
    entry("19034000", true, Charge, "shops", "shops=>luggage"),
    entry("19035000", true, Charge, "shops", "shops=>marine supplies"),
    entry("19036000", true, Charge, "shops", "shops=>music, video and dvd"),
    entry("19037000", true, Charge, "shops", "shops=>musical instruments"),
    entry("19038000", true, Charge, "shops", "shops=>newsstands"),
    entry("19039000", true, Charge, "shops", "shops=>office supplies"),
    entry("19040000", true, Charge, "shops", "shops=>outlet"),
    entry("19040001", true, Charge, "shops", "shops=>outlet=>women's store"),
    entry("19040002", true, Charge, "shops", "shops=>outlet=>swimwear"),
    entry("19040003", true, Charge, "shops", "shops=>outlet=>shoe store"),
    entry("19040004", true, Charge, "shops", "shops=>outlet=>men's store"),
    entry("19040005", true, Charge, "shops", "shops=>outlet=>lingerie store"),
    entry("19040006", true, Charge, "shops", "shops=>outlet=>kids' store"),
    entry("19040007", true, Charge, "shops", "shops=>outlet=>boutique"),
    entry("19040008", true, Charge, "shops", "shops=>outlet=>accessories store"),
    entry("19041000", true, Charge, "shops", "shops=>pawn shops"),
    entry("19042000", true, Charge, "shops", "shops=>pets"),
    entry("19043000", true, Charge, "shops", "shops=>pharmacies"),
    entry("19044000", true, Charge, "shops", "shops=>photos and frames"),
    entry("19045000", true, Charge, "shops", "shops=>shopping centers and malls"),
    entry("19046000", true, Charge, "shops", "shops=>sporting goods"),
    entry("19047000", true, Charge, "shops", "shops=>supermarkets and groceries"),
    entry("19048000", true, Charge, "shops", "shops=>tobacco"),
    entry("19049000", true, Charge, "shops", "shops=>toys"),
    entry("19050000", true, Charge, "shops", "shops=>vintage and thrift"),
    entry("19051000", true, Charge, "shops", "shops=>warehouses and wholesale stores"),
    entry("19052000", true, Charge, "shops", "shops=>wedding and bridal"),
    entry("19053000", true, Charge, "shops", "shops=>wholesale"),
    entry("19054000", true, Charge, "shops", "shops=>lawn and garden"),
    entry("20000000", false, Charge, "tax", "tax"),
    entry("20001000", false, Charge, "tax", "tax=>refund"),
    entry("20002000", false, Charge, "tax", "tax=>payment"),
    entry("21000000", false, Charge, "transfer", "transfer"),
    entry("21001000", false, Charge, "transfer", "transfer=>internal account transfer"),
    entry("21002000", false, Charge, "transfer", "transfer=>ach"),
    entry("21003000", false, Charge, "transfer", "transfer=>billpay"),
    entry("21004000", false, Charge, "transfer", "transfer=>check"),
    entry("21005000", false, Charge, "transfer", "transfer=>credit"),
    entry("21006000", false, Charge, "transfer", "transfer=>debit"),
    entry("21007000", false, Charge, "transfer", "transfer=>deposit"),
    entry("21007001", false, Charge, "transfer", "transfer=>deposit=>check"),
    entry("21007002", false, Charge, "transfer", "transfer=>deposit=>atm"),
    entry("21008000", false, Charge, "transfer", "transfer=>keep the change savings program"),
    entry("21009000", false, Charge, "transfer", "transfer=>payroll"),
    entry("21009001", false, Charge, "transfer", "transfer=>payroll=>benefits"),
    entry("21010000", false, Charge, "transfer", "transfer=>third party"),
    entry("21010001", false, Charge, "transfer", "transfer=>third party=>venmo"),
    entry("21010002", false, Charge, "transfer", "transfer=>third party=>square cash"),
    entry("21010003", false, Charge, "transfer", "transfer=>third party=>square"),
    entry("21010004", false, Charge, "transfer", "transfer=>third party=>paypal"),
    entry("21010005", false, Charge, "transfer", "transfer=>third party=>dwolla"),
    entry("21010006", false, Charge, "transfer", "transfer=>third party=>coinbase"),
    entry("21010007", false, Charge, "transfer", "transfer=>third party=>chase quickpay"),
    entry("21010008", false, Charge, "transfer", "transfer=>third party=>acorns"),
    entry("21010009", false, Charge, "transfer", "transfer=>third party=>digit"),
    entry("21010010", false, Charge, "transfer", "transfer=>third party=>betterment"),
    entry("21010011", false, Charge, "transfer", "transfer=>third party=>plaid"),
    entry("21011000", false, Charge, "transfer", "transfer=>wire"),
    entry("21012000", false, Charge, "transfer", "transfer=>withdrawal"),
    entry("21012001", false, Charge, "transfer", "transfer=>withdrawal=>check"),
    entry("21012002", false, Charge, "transfer", "transfer=>withdrawal=>atm"),
    entry("21013000", false, Charge, "transfer", "transfer=>save as you go"),
    entry("22000000", true, Charge, "travel", "travel"),
    entry("22001000", false, Charge, "travel", "travel=>airlines and aviation services"),
    entry("22002000", true, Charge, "travel", "travel=>airports"),
    entry("22003000", true, Charge, "travel", "travel=>boat"),
    entry("22004000", true, Charge, "travel", "travel=>bus stations"),
    entry("22005000", true, Charge, "travel", "travel=>car and truck rentals"),
    entry("22006000", true, Charge, "travel", "travel=>car service"),
    entry("22006001", false, Charge, "travel", "travel=>car service=>ride share"),
    entry("22007000", true, Charge, "travel", "travel=>charter buses"),
    entry("22008000", false, Charge, "travel", "travel=>cruises"),
    entry("22009000", true, Charge, "travel", "travel=>gas stations"),
    entry("22010000", true, Charge, "travel", "travel=>heliports"),
    entry("22011000", true, Charge, "travel", "travel=>limos and chauffeurs"),
    entry("22012000", true, Charge, "travel", "travel=>lodging"),
    entry("22012001", true, Charge, "travel", "travel=>lodging=>resorts"),
    entry("22012002", true, Charge, "travel", "travel=>lodging=>lodges and vacation rentals"),
    entry("22012003", true, Charge, "travel", "travel=>lodging=>hotels and motels"),
    entry("22012004", true, Charge, "travel", "travel=>lodging=>hostels"),
    entry("22012005", true, Charge, "travel", "travel=>lodging=>cottages and cabins"),
    entry("22012006", true, Charge, "travel", "travel=>lodging=>bed and breakfasts"),
    entry("22013000", true, Charge, "travel", "travel=>parking"),
    entry("22014000", true, Charge, "travel", "travel=>public transportation services"),
    entry("22015000", true, Charge, "travel", "travel=>rail"),
    entry("22016000", false, Charge, "travel", "travel=>taxi"),
    entry("22017000", false, Charge, "travel", "travel=>tolls and fees"),
    entry("22018000", true, Charge, "travel", "travel=>transportation centers"),
];
